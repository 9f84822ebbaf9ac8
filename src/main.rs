use anyhow::Result;

fn main() -> Result<()> {
    ai_session_cloner::cli::run()
}
