pub mod batch;
pub mod rank;
pub mod score;

use clap::ValueEnum;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
