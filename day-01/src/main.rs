#[tracing::instrument]
fn main() -> miette::Result<()> {
    aoc_utils::telemetry::init("day_01");

    let input = aoc_utils::input::load(1)?;
    for line in day_01::run(&input)? {
        println!("{line}");
    }
    Ok(())
}
