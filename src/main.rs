fn main() -> anyhow::Result<()> {
    cagey::runner::run()
}
