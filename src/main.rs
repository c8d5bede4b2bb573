use env_logger::Env;
use pike_arena::{EngineBuilder, EngineError};

fn main() -> Result<(), EngineError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    EngineBuilder::new().build().run()
}
