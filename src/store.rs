//! Create Point State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Transitions touching several fields are `&mut self` methods on
//! [`CreatePointState`], applied through `store.write()`. Single-field
//! changes go through the `store_*` helpers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::FetchError;
use crate::models::{
    Coordinate, FormField, FormFields, PointSubmission, SelectableItem, UploadedFile,
    DEFAULT_POSITION, NO_SELECTION,
};

/// Submission lifecycle for one page visit
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        *self == SubmitStatus::Submitting
    }

    /// Message shown above the submit button after a failed POST
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// City lookup the caller must issue after a UF change
#[derive(Clone, Debug, PartialEq)]
pub struct CityRequest {
    pub uf: String,
    /// Matches the response back to the selection that asked for it
    pub token: u64,
}

/// What the page does once the POST settles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterSubmit {
    /// Show the acknowledgment, then go to `/`
    NavigateHome,
    StayOnForm,
}

/// Page state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct CreatePointState {
    /// Collectable categories from the backend
    pub items: Vec<SelectableItem>,
    /// UF abbreviations from IBGE
    pub ufs: Vec<String>,
    /// Cities of `selected_uf`
    pub cities: Vec<String>,
    pub selected_uf: String,
    pub selected_city: String,
    pub form: FormFields,
    /// Map centre
    pub initial_position: Coordinate,
    /// Marker position, sent with the point
    pub selected_position: Coordinate,
    /// Toggled item ids in click order, no duplicates
    pub selected_items: Vec<u32>,
    pub uploaded_file: Option<UploadedFile>,
    pub submit_status: SubmitStatus,
    /// Token of the latest city request
    pub city_request_token: u64,
}

impl Default for CreatePointState {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION)
    }
}

impl CreatePointState {
    pub fn new(default_position: Coordinate) -> Self {
        Self {
            items: Vec::new(),
            ufs: Vec::new(),
            cities: Vec::new(),
            selected_uf: NO_SELECTION.to_string(),
            selected_city: NO_SELECTION.to_string(),
            form: FormFields::default(),
            initial_position: default_position,
            selected_position: default_position,
            selected_items: Vec::new(),
            uploaded_file: None,
            submit_status: SubmitStatus::Idle,
            city_request_token: 0,
        }
    }

    // ========================
    // Position
    // ========================

    /// Device position overrides both the centre and the marker
    pub fn apply_geolocation(&mut self, position: Coordinate) {
        self.initial_position = position;
        self.selected_position = position;
    }

    // ========================
    // Address
    // ========================

    /// Select a UF. Returns the city lookup to issue, if any.
    ///
    /// The city list and city choice are reset on every change. The
    /// sentinel and re-selecting the current UF never produce a request.
    pub fn select_uf(&mut self, uf: &str) -> Option<CityRequest> {
        if self.selected_uf == uf {
            return None;
        }
        self.selected_uf = uf.to_string();
        self.cities.clear();
        self.selected_city = NO_SELECTION.to_string();

        // Invalidate any lookup still in flight for the previous UF
        self.city_request_token += 1;

        if uf == NO_SELECTION {
            return None;
        }
        Some(CityRequest {
            uf: uf.to_string(),
            token: self.city_request_token,
        })
    }

    /// Replace the city list. Returns false if the response was stale.
    pub fn apply_cities(&mut self, token: u64, cities: Vec<String>) -> bool {
        if token != self.city_request_token {
            return false;
        }
        self.cities = cities;
        true
    }

    // ========================
    // Submission
    // ========================

    /// Snapshot the page into the multipart payload. No validation.
    pub fn build_submission(&self) -> PointSubmission {
        let items = self
            .selected_items
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        PointSubmission {
            fields: vec![
                ("name", self.form.name.clone()),
                ("email", self.form.email.clone()),
                ("whatssap", self.form.whatssap.clone()),
                ("uf", self.selected_uf.clone()),
                ("city", self.selected_city.clone()),
                ("latitude", format_degrees(self.selected_position.latitude)),
                ("longitude", format_degrees(self.selected_position.longitude)),
                ("items", items),
            ],
            image: self.uploaded_file.clone(),
        }
    }

    /// Enter `Submitting`. Returns `None` while a POST is already in flight.
    pub fn begin_submit(&mut self) -> Option<PointSubmission> {
        if self.submit_status.is_submitting() {
            return None;
        }
        self.submit_status = SubmitStatus::Submitting;
        Some(self.build_submission())
    }

    pub fn finish_submit(&mut self, result: Result<(), FetchError>) -> AfterSubmit {
        match result {
            Ok(()) => {
                self.submit_status = SubmitStatus::Succeeded;
                AfterSubmit::NavigateHome
            }
            Err(e) => {
                self.submit_status = SubmitStatus::Failed(e.to_string());
                AfterSubmit::StayOnForm
            }
        }
    }
}

/// Type alias for the store
pub type PointStore = Store<CreatePointState>;

/// Get the page store from context
pub fn use_point_store() -> PointStore {
    expect_context::<PointStore>()
}

/// Coordinate text as the backend expects it (`-0` is sent as `0`)
fn format_degrees(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Map centre and marker. Downstream effects only rerun when the
/// coordinate itself changes, not on every write to the store.
pub fn map_positions(store: PointStore) -> (Memo<Coordinate>, Memo<Coordinate>) {
    let center = Memo::new(move |_| store.initial_position().get());
    let marker = Memo::new(move |_| store.selected_position().get());
    (center, marker)
}

// ========================
// Store Helper Functions
// ========================
// Single-field changes write through their field so that subscribers of
// other fields are not notified.

pub fn store_set_items(store: &PointStore, items: Vec<SelectableItem>) {
    store.items().set(items);
}

pub fn store_set_ufs(store: &PointStore, ufs: Vec<String>) {
    store.ufs().set(ufs);
}

pub fn store_select_city(store: &PointStore, city: &str) {
    store.selected_city().set(city.to_string());
}

/// Move the marker. The map centre is left alone.
pub fn store_map_click(store: &PointStore, position: Coordinate) {
    store.selected_position().set(position);
}

/// Merge an input change by field name. Returns false for unknown names.
pub fn store_set_field(store: &PointStore, name: &str, value: String) -> bool {
    match FormField::from_name(name) {
        Some(field) => {
            store.form().update(|form| form.set(field, value));
            true
        }
        None => false,
    }
}

/// Add the id if absent, remove it if present
pub fn store_toggle_item(store: &PointStore, id: u32) {
    let field = store.selected_items();
    let mut selected = field.write();
    if let Some(index) = selected.iter().position(|&i| i == id) {
        selected.remove(index);
    } else {
        selected.push(id);
    }
}

/// Replace the uploaded file
pub fn store_set_file(store: &PointStore, file: UploadedFile) {
    store.uploaded_file().set(Some(file));
}
