pub mod seed;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::errors::AppError;
use crate::models::{AdminAccount, Booking, CustomerAccount, Provider, Role};

/// Process-lifetime state. Providers and admins are read-only after
/// construction; customers and bookings are append-only behind short
/// synchronous lock sections. Constructed once in `main` (or per test)
/// and injected through `AppState`.
pub struct Store {
    providers: Vec<Provider>,
    admins: Vec<AdminAccount>,
    customers: RwLock<Vec<CustomerAccount>>,
    bookings: RwLock<Vec<Booking>>,
    booking_seq: AtomicU64,
    customer_seq: AtomicU64,
}

impl Store {
    pub fn new(providers: Vec<Provider>, admins: Vec<AdminAccount>) -> Self {
        Self {
            providers,
            admins,
            customers: RwLock::new(Vec::new()),
            bookings: RwLock::new(Vec::new()),
            booking_seq: AtomicU64::new(0),
            customer_seq: AtomicU64::new(0),
        }
    }

    // ── Providers ──

    /// Approved providers in seed order, optionally narrowed to those
    /// offering the given service slug.
    pub fn list_providers(&self, service_slug: Option<&str>) -> Vec<Provider> {
        self.providers
            .iter()
            .filter(|p| p.approved)
            .filter(|p| service_slug.map_or(true, |slug| p.offers(slug)))
            .cloned()
            .collect()
    }

    /// Approved providers only. An unapproved id reports the same as an
    /// unknown one.
    pub fn get_provider(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id && p.approved)
    }

    // ── Accounts ──

    pub fn find_admin(&self, email: &str) -> Option<&AdminAccount> {
        self.admins.iter().find(|a| a.email == email)
    }

    /// Duplicate emails are rejected case-insensitively, consistent with
    /// the booking email filter.
    pub fn register_customer(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        password_hash: String,
    ) -> Result<CustomerAccount, AppError> {
        let mut customers = self.customers.write().unwrap();
        if customers.iter().any(|c| c.email.eq_ignore_ascii_case(email)) {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let id = format!("c{}", self.customer_seq.fetch_add(1, Ordering::SeqCst) + 1);
        let customer = CustomerAccount {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            password_hash,
            role: Role::Customer,
        };
        customers.push(customer.clone());
        Ok(customer)
    }

    // ── Bookings ──

    pub fn next_booking_id(&self) -> String {
        format!("b{}", self.booking_seq.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn append_booking(&self, booking: Booking) {
        self.bookings.write().unwrap().push(booking);
    }

    /// Independent optional filters over the full store, in creation order.
    /// Email matching is case-insensitive.
    pub fn list_bookings(
        &self,
        customer_email: Option<&str>,
        provider_id: Option<&str>,
    ) -> Vec<Booking> {
        self.bookings
            .read()
            .unwrap()
            .iter()
            .filter(|b| {
                customer_email.map_or(true, |email| b.customer.email.eq_ignore_ascii_case(email))
            })
            .filter(|b| provider_id.map_or(true, |id| b.provider_id == id))
            .cloned()
            .collect()
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.read().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unapproved(id: &str, slug: &str) -> Provider {
        Provider {
            id: id.to_string(),
            name: "Pending Vendor".to_string(),
            services: vec![slug.to_string()],
            location: "Kochi".to_string(),
            price: 500,
            approved: false,
        }
    }

    fn store_with_unapproved() -> Store {
        let mut providers = seed::providers();
        providers.push(unapproved("p8", "ac-installation"));
        Store::new(providers, vec![])
    }

    #[test]
    fn test_list_providers_excludes_unapproved() {
        let store = store_with_unapproved();
        let all = store.list_providers(None);
        assert_eq!(all.len(), 7);
        assert!(all.iter().all(|p| p.approved));
    }

    #[test]
    fn test_list_providers_filters_by_service() {
        let store = Store::new(seed::providers(), vec![]);
        let cctv = store.list_providers(Some("cctv-installation"));
        assert_eq!(cctv.len(), 1);
        assert_eq!(cctv[0].id, "p2");
    }

    #[test]
    fn test_list_providers_preserves_seed_order() {
        let store = Store::new(seed::providers(), vec![]);
        let ids: Vec<String> = store.list_providers(None).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["p1", "p2", "p3", "p4", "p5", "p6", "p7"]);
    }

    #[test]
    fn test_get_provider_unapproved_indistinguishable_from_unknown() {
        let store = store_with_unapproved();
        assert!(store.get_provider("p8").is_none());
        assert!(store.get_provider("p99").is_none());
        assert!(store.get_provider("p1").is_some());
    }

    #[test]
    fn test_register_customer_rejects_duplicate_email_case_insensitive() {
        let store = Store::new(vec![], vec![]);
        store
            .register_customer("Asha", "asha@example.com", "999", "hash".to_string())
            .unwrap();

        let err = store
            .register_customer("Asha", "ASHA@Example.COM", "999", "hash2".to_string())
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_customer_ids_are_sequential() {
        let store = Store::new(vec![], vec![]);
        let c1 = store
            .register_customer("A", "a@example.com", "1", "h".to_string())
            .unwrap();
        let c2 = store
            .register_customer("B", "b@example.com", "2", "h".to_string())
            .unwrap();
        assert_eq!(c1.id, "c1");
        assert_eq!(c2.id, "c2");
    }

    #[test]
    fn test_booking_ids_unique_across_threads() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let store = Arc::new(Store::new(vec![], vec![]));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| store.next_booking_id()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate booking id assigned");
            }
        }
        assert_eq!(seen.len(), 800);
    }
}
