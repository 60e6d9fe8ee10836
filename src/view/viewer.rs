use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use super::info::{CreatureInfo, ExtractError};
use super::state::ViewState;
use crate::api::{HttpTransport, PokeApiClient, ReqwestTransport};

pub const WINDOW_TITLE: &str = "Pokémon Information Viewer";
pub const ERROR_TITLE: &str = "Error";

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Invalid Pokémon name")]
    InvalidName,

    #[error(transparent)]
    Unexpected(#[from] ExtractError),

    #[error("prompt failed: {0}")]
    Prompt(String),
}

/// Input/output surface the viewer loop drives.
pub trait Frontend {
    /// Next name to look up. `None` once the user quits.
    fn read_name(&mut self) -> Result<Option<String>, ViewError>;

    fn show(&mut self, screen: &str);

    /// Blocks until the user has acknowledged the message.
    fn show_error(&mut self, title: &str, message: &str) -> Result<(), ViewError>;
}

/// Controller holding the client and the current display state.
pub struct InfoViewer<T = ReqwestTransport> {
    client: PokeApiClient<T>,
    state: ViewState,
}

impl<T: HttpTransport> InfoViewer<T> {
    pub fn new(client: PokeApiClient<T>) -> Self {
        Self {
            client,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// "Get Info" handler. The display state is only touched on success.
    pub async fn get_info(&mut self, name: &str) -> Result<(), ViewError> {
        let record = self
            .client
            .get_pokemon_info(name)
            .await
            .filter(|record| !is_empty_record(record))
            .ok_or(ViewError::InvalidName)?;
        let info = CreatureInfo::from_record(&record)?;
        self.state.apply(&info);
        Ok(())
    }
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` carry no record.
fn is_empty_record(record: &Value) -> bool {
    match record {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Read names until the frontend quits, showing the updated view or an
/// error dialog after each lookup.
pub async fn run_viewer<T, F>(viewer: &mut InfoViewer<T>, frontend: &mut F) -> Result<(), ViewError>
where
    T: HttpTransport,
    F: Frontend,
{
    frontend.show(&viewer.state().render());

    while let Some(name) = frontend.read_name()? {
        match viewer.get_info(&name).await {
            Ok(()) => frontend.show(&viewer.state().render()),
            Err(e) => {
                warn!(name = %name, "lookup failed: {}", e);
                frontend.show_error(ERROR_TITLE, &e.to_string())?;
            }
        }
    }

    Ok(())
}
