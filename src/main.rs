//! Life Board entry point
//!
//! Natively this runs a pattern headless for a number of generations and
//! prints the result. The browser build is driven through
//! `platform::web::WebLife` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    life_board::platform::init_logging();
    log::info!("Life Board (native) starting...");

    if let Err(err) = native::run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is WebLife, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;
    use std::time::{SystemTime, UNIX_EPOCH};

    use life_board::consts::DEFAULT_GENERATIONS;
    use life_board::pattern::{self, Pattern};
    use life_board::{Grid, Settings, SimulationSession};

    const DEFAULT_STAMP: &str = "Gosper glider gun";

    fn render(grid: &Grid) -> String {
        grid.iter_rows()
            .map(|row| {
                let mut line: String = row.iter().map(|&alive| if alive { '#' } else { '.' }).collect();
                line.push('\n');
                line
            })
            .collect()
    }

    /// `life-board [PATTERN_FILE] [GENERATIONS]`
    pub fn run() -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args().skip(1);

        let start: Pattern = match args.next() {
            Some(path) => {
                let text = std::fs::read_to_string(&path)?;
                log::info!("Importing pattern from {}", path);
                pattern::decode(&text)
            }
            None => pattern::stamp_by_name(DEFAULT_STAMP)
                .map(|stamp| stamp.pattern)
                .unwrap_or_default(),
        };
        let generations = match args.next() {
            Some(n) => n.parse::<u64>()?,
            None => DEFAULT_GENERATIONS,
        };

        let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let mut session = SimulationSession::from_settings(&Settings::default(), seed);
        session.load_pattern(&start);
        session.start();

        while session.generation() < generations {
            let Some(report) = session.step() else {
                break;
            };
            if report.extinct {
                println!("Died out at generation {}", report.generation);
            }
        }

        print!("{}", render(session.grid()));
        println!(
            "Generation {} | {} live cells | board {}",
            session.generation(),
            session.population(),
            session.board_size().as_str()
        );
        Ok(())
    }
}
