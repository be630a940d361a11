#[tracing::instrument]
fn main() -> miette::Result<()> {
    aoc_utils::telemetry::init("day_02");

    let input = aoc_utils::input::load(2)?;
    for line in day_02::run(&input)? {
        println!("{line}");
    }
    Ok(())
}
