//! JSON configuration for the demo binary.

pub mod run;

pub use run::{
    load_config, parse_config, LinesConfig, OutputConfig, RunConfig, StageConfig, TileConfig,
};
