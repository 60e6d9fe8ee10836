pub mod api;
pub mod logging;
pub mod view;

pub use api::{
    normalize_identifier, ClientConfig, FetchError, HttpResponse, HttpTransport, PokeApiClient,
    ReqwestTransport,
};
pub use view::{
    run_viewer, BaseStats, CreatureInfo, ExtractError, Frontend, InfoViewer, InquireFrontend,
    StatGauge, ViewError, ViewState,
};
