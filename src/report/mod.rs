pub mod json;
pub mod md;

use crate::error::BoardError;
use crate::types::score::Leaderboard;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(board: &Leaderboard, format: OutputFormat) -> Result<String, BoardError> {
    match format {
        OutputFormat::Json => json::to_json(board).map_err(BoardError::Json),
        OutputFormat::Md => Ok(md::to_markdown(board)),
    }
}
