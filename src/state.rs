//! Application state
//!
//! Shared by every command. Settings are cached in memory and written
//! through to the store; catalog lists are read from the store on demand.
//! Lock order is always settings, then store.

use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::adapters::RateTable;
use crate::calc;
use crate::catalog::{self, FILAMENTS_KEY, OFFERS_KEY, PRINTERS_KEY};
use crate::domain::{
    AppError, AppResult, CalculationRequest, CalculationResult, Filament, Offer, OfferRequest,
    Printer, Settings,
};
use crate::ports::{CurrencyConverter, KeyValueStore};

/// Shared application state managed by Tauri
pub struct AppState {
    pub settings: Mutex<Settings>,
    pub store: Mutex<Box<dyn KeyValueStore>>,
    pub converter: Box<dyn CurrencyConverter>,
}

/// Resolved inputs of one calculation
struct Inputs {
    settings: Settings,
    printer: Option<Printer>,
    filaments: Vec<Filament>,
}

impl AppState {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        match catalog::unknown_keys(store.as_ref()) {
            Ok(keys) if !keys.is_empty() => {
                log::warn!("Ignoring unknown store keys: {}", keys.join(", "))
            }
            Ok(_) => {}
            Err(e) => log::warn!("Could not list store keys: {e}"),
        }
        let settings = catalog::load_settings(store.as_ref());
        log::info!(
            "Settings loaded: currency={}, electricity={} c/kWh",
            settings.currency,
            settings.electricity_price
        );
        Self {
            settings: Mutex::new(settings),
            store: Mutex::new(store),
            converter: Box::new(RateTable::new()),
        }
    }

    pub fn with_converter(mut self, converter: Box<dyn CurrencyConverter>) -> Self {
        self.converter = converter;
        self
    }

    fn lock_store(&self) -> AppResult<MutexGuard<'_, Box<dyn KeyValueStore>>> {
        self.store
            .lock()
            .map_err(|_| AppError::Storage("Store state corrupted".to_string()))
    }

    fn lock_settings(&self) -> AppResult<MutexGuard<'_, Settings>> {
        self.settings
            .lock()
            .map_err(|_| AppError::Config("Settings state corrupted".to_string()))
    }

    // --- settings ---

    pub fn settings(&self) -> AppResult<Settings> {
        Ok(self.lock_settings()?.clone())
    }

    pub fn update_settings(&self, settings: Settings) -> AppResult<()> {
        if !settings.electricity_price.is_finite() {
            return Err(AppError::Config("Electricity price must be a number".to_string()));
        }
        let mut current = self.lock_settings()?;
        catalog::save_settings(self.lock_store()?.as_mut(), &settings)?;
        log::info!("Settings saved: currency={}", settings.currency);
        *current = settings;
        Ok(())
    }

    // --- catalog ---

    pub fn printers(&self) -> AppResult<Vec<Printer>> {
        catalog::load_list(self.lock_store()?.as_ref(), PRINTERS_KEY)
    }

    /// Insert or update; a blank id gets a fresh one
    pub fn save_printer(&self, mut printer: Printer) -> AppResult<Printer> {
        if printer.id.trim().is_empty() {
            printer.id = Uuid::new_v4().to_string();
        }
        catalog::upsert(self.lock_store()?.as_mut(), PRINTERS_KEY, printer.clone())?;
        log::info!("Saved printer '{}' ({})", printer.name, printer.id);
        Ok(printer)
    }

    pub fn delete_printer(&self, id: &str) -> AppResult<bool> {
        catalog::remove::<Printer>(self.lock_store()?.as_mut(), PRINTERS_KEY, id)
    }

    pub fn filaments(&self) -> AppResult<Vec<Filament>> {
        catalog::load_list(self.lock_store()?.as_ref(), FILAMENTS_KEY)
    }

    /// Insert or update; a blank id gets a fresh one
    pub fn save_filament(&self, mut filament: Filament) -> AppResult<Filament> {
        if filament.id.trim().is_empty() {
            filament.id = Uuid::new_v4().to_string();
        }
        catalog::upsert(self.lock_store()?.as_mut(), FILAMENTS_KEY, filament.clone())?;
        log::info!("Saved filament '{}' ({})", filament.label(), filament.id);
        Ok(filament)
    }

    pub fn delete_filament(&self, id: &str) -> AppResult<bool> {
        catalog::remove::<Filament>(self.lock_store()?.as_mut(), FILAMENTS_KEY, id)
    }

    pub fn offers(&self) -> AppResult<Vec<Offer>> {
        catalog::load_list(self.lock_store()?.as_ref(), OFFERS_KEY)
    }

    pub fn delete_offer(&self, id: &str) -> AppResult<bool> {
        catalog::remove::<Offer>(self.lock_store()?.as_mut(), OFFERS_KEY, id)
    }

    // --- calculation ---

    fn inputs(&self, request: &CalculationRequest) -> AppResult<Inputs> {
        let settings = self.settings()?;
        let store = self.lock_store()?;
        let printers: Vec<Printer> = catalog::load_list(store.as_ref(), PRINTERS_KEY)?;
        let filaments: Vec<Filament> = catalog::load_list(store.as_ref(), FILAMENTS_KEY)?;
        let printer = request
            .printer_id
            .as_deref()
            .and_then(|id| printers.into_iter().find(|p| p.id == id));
        Ok(Inputs {
            settings,
            printer,
            filaments,
        })
    }

    /// Cost breakdown, `None` while the request is incomplete
    pub fn calculate(&self, request: &CalculationRequest) -> AppResult<Option<CalculationResult>> {
        let inputs = self.inputs(request)?;
        Ok(calc::calculate_costs(
            inputs.printer.as_ref(),
            &request.filaments,
            request.print_time,
            &inputs.settings,
            &inputs.filaments,
            self.converter.as_ref(),
        ))
    }

    /// Localized validation messages followed by settings warnings
    pub fn validate(&self, request: &CalculationRequest) -> AppResult<Vec<String>> {
        let inputs = self.inputs(request)?;
        let mut messages = calc::validate_inputs(
            inputs.printer.as_ref(),
            &request.filaments,
            request.print_time,
            &inputs.filaments,
            &inputs.settings,
        );
        messages.extend(calc::settings_warnings(&inputs.settings));
        Ok(messages)
    }

    // --- offers ---

    /// Calculate, snapshot into an offer and store it
    pub fn create_offer(&self, request: &OfferRequest) -> AppResult<Offer> {
        let calculation = &request.calculation;
        let inputs = self.inputs(calculation)?;
        let costs = calc::calculate_costs(
            inputs.printer.as_ref(),
            &calculation.filaments,
            calculation.print_time,
            &inputs.settings,
            &inputs.filaments,
            self.converter.as_ref(),
        );
        let (Some(printer), Some(costs)) = (inputs.printer.as_ref(), costs) else {
            let reasons = calc::validate_inputs(
                inputs.printer.as_ref(),
                &calculation.filaments,
                calculation.print_time,
                &inputs.filaments,
                &inputs.settings,
            );
            return Err(AppError::Incomplete(reasons.join(" ")));
        };

        let offer = calc::build_offer(
            &request.draft,
            printer,
            &calculation.filaments,
            &inputs.filaments,
            calculation.print_time,
            costs,
            &inputs.settings,
            request.job.as_ref(),
        );
        let mut store = self.lock_store()?;
        let mut offers: Vec<Offer> = catalog::load_list(store.as_ref(), OFFERS_KEY)?;
        offers.push(offer.clone());
        catalog::save(store.as_mut(), OFFERS_KEY, &offers)?;
        log::info!(
            "Created offer {} for '{}': {} {}",
            offer.id,
            offer.customer_name,
            offer.final_price,
            offer.currency
        );
        Ok(offer)
    }
}
