#[tracing::instrument]
fn main() -> miette::Result<()> {
    aoc_utils::telemetry::init("day_03");

    let input = aoc_utils::input::load(3)?;
    for line in day_03::run(&input)? {
        println!("{line}");
    }
    Ok(())
}
