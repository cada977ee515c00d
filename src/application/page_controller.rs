use url::{form_urlencoded, Url};

use crate::domain::errors::ValidationError;
use crate::domain::order_id::OrderId;
use crate::domain::ports::OrderSource;
use crate::view::renderer::Renderer;
use crate::view::surface::{regions, DisplaySurface};

/// Query parameter carrying the order uid on the result page.
pub const ORDER_UID_PARAM: &str = "order_uid";

pub const RESULT_PAGE_PATH: &str = "/result.html";

pub const MISSING_ID_MESSAGE: &str = "Order UID not specified in URL";

pub const SUBMIT_KEY: &str = "Enter";

// ── Search entry page ────────────────────────────────────────────────────────

/// Search entry page. Holds no state; validation never touches the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchPage;

impl SearchPage {
    /// Validate `raw` and return the result page location to navigate to.
    pub fn submit(&self, raw: &str) -> Result<String, ValidationError> {
        let id = OrderId::parse(raw)?;
        Ok(result_location(&id))
    }

    /// Submits on [`SUBMIT_KEY`]; any other key does nothing.
    pub fn on_key_press(&self, key: &str, raw: &str) -> Option<Result<String, ValidationError>> {
        (key == SUBMIT_KEY).then(|| self.submit(raw))
    }
}

/// `/result.html?order_uid=<id>` with the id form-encoded.
pub fn result_location(id: &OrderId) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair(ORDER_UID_PARAM, id.as_str())
        .finish();
    format!("{}?{}", RESULT_PAGE_PATH, query)
}

/// The `order_uid` parameter of `location`, an absolute URL or a path with an
/// optional query. Empty values count as absent.
pub fn order_uid_from_location(location: &str) -> Option<String> {
    let query = match Url::parse(location) {
        Ok(url) => url.query().map(str::to_string),
        Err(_) => location
            .split_once('?')
            .map(|(_, q)| q.split('#').next().unwrap_or_default().to_string()),
    }?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == ORDER_UID_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

// ── Result page ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Idle,
    Loading,
    Result,
    Error,
}

/// Drives one result page load: fetch, render and mode region toggling.
pub struct ResultPage<S, D> {
    source: S,
    surface: D,
    renderer: Renderer,
    state: PageState,
}

impl<S: OrderSource, D: DisplaySurface> ResultPage<S, D> {
    pub fn new(source: S, surface: D, renderer: Renderer) -> Self {
        Self {
            source,
            surface,
            renderer,
            state: PageState::Idle,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn into_surface(self) -> D {
        self.surface
    }

    /// Load the page for `location`.
    pub async fn open(&mut self, location: &str) -> PageState {
        let order_uid = order_uid_from_location(location);
        self.load(order_uid.as_deref()).await
    }

    /// Load the page for the `order_uid` parameter value, if any.
    pub async fn load(&mut self, order_uid: Option<&str>) -> PageState {
        let Some(raw) = order_uid.filter(|uid| !uid.is_empty()) else {
            self.show_error(MISSING_ID_MESSAGE);
            return self.state;
        };
        let id = match OrderId::parse(raw) {
            Ok(id) => id,
            Err(e) => {
                self.show_error(&e.to_string());
                return self.state;
            }
        };

        self.transition(PageState::Loading);
        self.surface.set_region_visible(regions::ERROR, false);
        self.surface.set_region_visible(regions::RESULT, false);
        self.surface.set_region_visible(regions::LOADING, true);

        match self.source.fetch_order(&id).await {
            Ok(fetched) => {
                self.renderer
                    .render(&mut self.surface, &fetched.order, fetched.execution_time_ms);
                self.surface.set_region_visible(regions::LOADING, false);
                self.surface.set_region_visible(regions::RESULT, true);
                self.transition(PageState::Result);
            }
            Err(e) => {
                log::debug!("Order {} failed to load: {}", id, e.detail());
                self.show_error(&e.to_string());
            }
        }
        self.state
    }

    fn show_error(&mut self, message: &str) {
        self.surface.set_region_visible(regions::LOADING, false);
        self.surface.set_region_visible(regions::RESULT, false);
        self.surface.set_region_text(regions::ERROR_MESSAGE, message);
        self.surface.set_region_visible(regions::ERROR, true);
        self.transition(PageState::Error);
    }

    fn transition(&mut self, next: PageState) {
        log::debug!("Result page {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
