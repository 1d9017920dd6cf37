use line_intersection::solve_line_intersection::solve_line_intersection;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: solve_lines M1 u1 M2 u2 (8 numbers for 2D, 12 for 3D)";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let values = match std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(values) => values,
        Err(e) => {
            error!("{}: {}", e, USAGE);
            return ExitCode::FAILURE;
        }
    };
    let dimension = match values.len() {
        8 => 2,
        12 => 3,
        n => {
            error!("got {} numbers; {}", n, USAGE);
            return ExitCode::FAILURE;
        }
    };

    let parts = values.chunks(dimension).collect::<Vec<_>>();
    match solve_line_intersection(parts[0], parts[1], parts[2], parts[3], true) {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
