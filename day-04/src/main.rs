#[tracing::instrument]
fn main() -> miette::Result<()> {
    aoc_utils::telemetry::init("day_04");

    let input = aoc_utils::input::load(4)?;
    for line in day_04::run(&input)? {
        println!("{line}");
    }
    Ok(())
}
