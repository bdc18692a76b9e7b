// ============================================================================
// SESSION STORE - Token y rol de la sesión actual
// ============================================================================
// La persistencia va detrás del trait SessionStorage: localStorage en
// producción, un HashMap en memoria para los tests.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::utils::constants::{ROLE_KEY, TOKEN_KEY};

/// Backend de persistencia clave/valor para la sesión
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// localStorage del navegador. Si no está disponible (modo privado,
/// iframe restringido) la sesión simplemente no sobrevive recargas.
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("⚠️ No se pudo guardar '{}' en localStorage", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Backend en memoria para tests
#[derive(Default)]
pub struct MemoryStorageBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Sesión del usuario: token bearer y rol, en memoria + storage durable.
/// Se clona barato (Rc) y se inyecta en el ApiClient y las vistas.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn SessionStorage>,
    token: Rc<RefCell<Option<String>>>,
    role: Rc<RefCell<Option<String>>>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            token: Rc::new(RefCell::new(None)),
            role: Rc::new(RefCell::new(None)),
        }
    }

    /// Restaurar la sesión persistida al arrancar. No valida el token
    /// contra el servidor: si expiró, se descubre en la primera llamada.
    pub fn restore(&self) -> bool {
        let token = self.storage.get(TOKEN_KEY);
        let role = self.storage.get(ROLE_KEY);
        let found = token.is_some();
        *self.token.borrow_mut() = token;
        *self.role.borrow_mut() = role;
        found
    }

    /// Iniciar sesión: guarda token (y rol si viene) en memoria y storage
    pub fn start(&self, token: String, role: Option<String>) {
        self.storage.set(TOKEN_KEY, &token);
        if let Some(r) = &role {
            self.storage.set(ROLE_KEY, r);
        }
        *self.token.borrow_mut() = Some(token);
        *self.role.borrow_mut() = role;
    }

    /// Cerrar sesión: limpia memoria y storage. Sin llamada al servidor.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(ROLE_KEY);
        *self.token.borrow_mut() = None;
        *self.role.borrow_mut() = None;
    }

    /// Token actual, leído en el momento de cada petición
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn role(&self) -> Option<String> {
        self.role.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_en_memoria() -> (Rc<MemoryStorageBackend>, SessionStore) {
        let backend = Rc::new(MemoryStorageBackend::default());
        let store = SessionStore::new(backend.clone());
        (backend, store)
    }

    #[test]
    fn sin_token_no_hay_sesion() {
        let (_, store) = store_en_memoria();
        assert!(!store.restore());
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn start_persiste_token_y_rol() {
        let (backend, store) = store_en_memoria();
        store.start("jwt-abc".into(), Some("ROLE_ADMIN".into()));

        assert!(store.is_authenticated());
        assert_eq!(backend.get("jwt_token"), Some("jwt-abc".into()));
        assert_eq!(backend.get("user_role"), Some("ROLE_ADMIN".into()));
    }

    #[test]
    fn restore_recupera_sesion_persistida() {
        let backend = Rc::new(MemoryStorageBackend::default());
        backend.set("jwt_token", "jwt-previo");
        backend.set("user_role", "ROLE_ANALISTA");

        let store = SessionStore::new(backend);
        assert!(store.restore());
        assert_eq!(store.token(), Some("jwt-previo".into()));
        assert_eq!(store.role(), Some("ROLE_ANALISTA".into()));
    }

    #[test]
    fn clear_borra_ambas_claves() {
        let (backend, store) = store_en_memoria();
        store.start("jwt-abc".into(), Some("ROLE_ADMIN".into()));
        store.clear();

        assert!(!store.is_authenticated());
        assert_eq!(backend.get("jwt_token"), None);
        assert_eq!(backend.get("user_role"), None);
        assert_eq!(store.role(), None);
    }
}
