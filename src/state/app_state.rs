// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Affiliate, CreditRequest};
use crate::services::session_store::SessionStore;

/// Secciones navegables del shell. Afiliados y Solicitudes recargan
/// su lista al activarse; el dashboard no tiene datos asociados.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Affiliates,
    Credits,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Affiliates => "affiliates",
            Section::Credits => "credits",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Inicio",
            Section::Affiliates => "Afiliados",
            Section::Credits => "Solicitudes",
        }
    }

    pub fn all() -> [Section; 3] {
        [Section::Dashboard, Section::Affiliates, Section::Credits]
    }
}

/// Estado de la aplicación. Clonable (Rc) para compartir entre closures.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub active_section: Rc<RefCell<Section>>,
    pub affiliates: Rc<RefCell<Vec<Affiliate>>>,
    pub credits: Rc<RefCell<Vec<CreditRequest>>>,
}

impl AppState {
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            active_section: Rc::new(RefCell::new(Section::Dashboard)),
            affiliates: Rc::new(RefCell::new(Vec::new())),
            credits: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn active_section(&self) -> Section {
        *self.active_section.borrow()
    }

    pub fn set_active_section(&self, section: Section) {
        *self.active_section.borrow_mut() = section;
    }

    pub fn set_affiliates(&self, affiliates: Vec<Affiliate>) {
        *self.affiliates.borrow_mut() = affiliates;
    }

    pub fn set_credits(&self, credits: Vec<CreditRequest>) {
        *self.credits.borrow_mut() = credits;
    }
}
