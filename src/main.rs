use layercube::prelude::*;

use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let notation = std::env::args().nth(1).unwrap_or_else(|| {
        "R2 U' L' R2 B2 F' L F2 U2 L' U' B D U2 L2 D2 U R' B F' L R F U R2 B' F2 L2 U' L"
            .to_string()
    });
    let scramble = Move::parse_sequence(&notation)?;

    let mut cube = Cube::new(3);
    for m in &scramble {
        cube.apply_move(*m);
    }
    println!("{}", cube);

    let mut solver = Solver::new(cube.clone());
    let solution = solver.try_solve()?;
    println!(
        "{}",
        solution
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    cube.apply_all(solution.iter().copied())?;
    println!("{}", cube);
    log::info!("Solved: {}", cube.is_solved());

    Ok(())
}
