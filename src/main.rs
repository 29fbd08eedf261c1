fn main() -> anyhow::Result<()> {
    log_category_filter::run()
}
