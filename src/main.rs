fn main() -> anyhow::Result<()> {
    stripes_eval::run::entry()
}
