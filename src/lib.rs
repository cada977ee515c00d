pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod view;

pub use application::page_controller::{PageState, ResultPage, SearchPage};
pub use config::AppConfig;
pub use domain::order::Order;
pub use domain::order_id::OrderId;
pub use errors::AppError;
pub use infrastructure::http_client::HttpOrderClient;
pub use view::renderer::Renderer;
pub use view::surface::{DisplaySurface, MemorySurface};

/// A result page backed by the HTTP order service and an in-memory surface.
pub fn build_result_page(config: &AppConfig) -> ResultPage<HttpOrderClient, MemorySurface> {
    ResultPage::new(
        HttpOrderClient::new(config.api_base_url.clone()),
        MemorySurface::new(),
        Renderer::new(config.date_formatter()),
    )
}
