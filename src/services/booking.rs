use chrono::{DateTime, Utc};

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, CustomerDetails};
use crate::services::slug::slugify;
use crate::store::Store;

/// A booking submission with fields as-received. Presence checks happen
/// here so a missing field reports as a 400, not an extractor rejection.
#[derive(Debug, Default)]
pub struct BookingRequest {
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub customer_address: Option<String>,
    pub provider_id: Option<String>,
    pub service: Option<String>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Validates the submission, resolves the provider, and appends the
/// constructed booking. On any failure nothing is appended and no id is
/// consumed.
pub fn create_booking(store: &Store, req: BookingRequest) -> Result<Booking, AppError> {
    let name = req.customer_name.unwrap_or_default();
    let phone = req.customer_phone.unwrap_or_default();
    let provider_id = req.provider_id.unwrap_or_default();
    let service = req.service.unwrap_or_default();

    if name.is_empty() || phone.is_empty() || provider_id.is_empty() || service.is_empty() {
        return Err(AppError::Validation(
            "Missing required booking fields".to_string(),
        ));
    }

    let provider = store
        .get_provider(&provider_id)
        .ok_or_else(|| AppError::NotFound("Provider not found or not approved".to_string()))?;

    let now = Utc::now();
    let booking = Booking {
        id: store.next_booking_id(),
        service_type: slugify(&service),
        provider_id: provider.id.clone(),
        provider_name: provider.name.clone(),
        status: BookingStatus::Scheduled,
        scheduled_time: req.scheduled_time.unwrap_or(now),
        price: provider.price,
        emergency: false,
        customer: CustomerDetails {
            name,
            phone,
            email: req.customer_email.unwrap_or_default(),
            address: req.customer_address.unwrap_or_default(),
            notes: req.notes.unwrap_or_default(),
        },
        created_at: now,
    };

    store.append_booking(booking.clone());
    Ok(booking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn test_store() -> Store {
        Store::new(seed::providers(), vec![])
    }

    fn valid_request() -> BookingRequest {
        BookingRequest {
            customer_name: Some("Asha".to_string()),
            customer_phone: Some("9900112233".to_string()),
            provider_id: Some("p1".to_string()),
            service: Some("AC Installation".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_fields_rejected() {
        let store = test_store();

        for req in [
            BookingRequest::default(),
            BookingRequest {
                customer_name: None,
                ..valid_request()
            },
            BookingRequest {
                customer_phone: Some(String::new()),
                ..valid_request()
            },
            BookingRequest {
                provider_id: None,
                ..valid_request()
            },
            BookingRequest {
                service: Some(String::new()),
                ..valid_request()
            },
        ] {
            let err = create_booking(&store, req).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
        assert_eq!(store.booking_count(), 0);
    }

    #[test]
    fn test_unknown_provider_appends_nothing() {
        let store = test_store();
        let err = create_booking(
            &store,
            BookingRequest {
                provider_id: Some("p99".to_string()),
                ..valid_request()
            },
        )
        .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.booking_count(), 0);
    }

    #[test]
    fn test_booking_copies_provider_fields() {
        let store = test_store();
        let booking = create_booking(&store, valid_request()).unwrap();

        assert_eq!(booking.id, "b1");
        assert_eq!(booking.service_type, "ac-installation");
        assert_eq!(booking.provider_id, "p1");
        assert_eq!(booking.provider_name, "John's Cooling Services");
        assert_eq!(booking.price, 800);
        assert_eq!(booking.status, BookingStatus::Scheduled);
        assert!(!booking.emergency);
        assert_eq!(store.booking_count(), 1);
    }

    #[test]
    fn test_ids_unique_across_bookings() {
        let store = test_store();
        let first = create_booking(&store, valid_request()).unwrap();
        let second = create_booking(&store, valid_request()).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(second.id, "b2");
    }

    #[test]
    fn test_scheduled_time_defaults_to_creation_time() {
        let store = test_store();
        let booking = create_booking(&store, valid_request()).unwrap();
        assert_eq!(booking.scheduled_time, booking.created_at);
    }

    #[test]
    fn test_explicit_scheduled_time_kept() {
        let store = test_store();
        let when = "2026-09-01T10:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let booking = create_booking(
            &store,
            BookingRequest {
                scheduled_time: Some(when),
                ..valid_request()
            },
        )
        .unwrap();
        assert_eq!(booking.scheduled_time, when);
    }

    #[test]
    fn test_notes_folded_into_customer() {
        let store = test_store();
        let booking = create_booking(
            &store,
            BookingRequest {
                notes: Some("Second floor, ring twice".to_string()),
                ..valid_request()
            },
        )
        .unwrap();
        assert_eq!(booking.customer.notes, "Second floor, ring twice");
        assert_eq!(booking.customer.email, "");
        assert_eq!(booking.customer.address, "");
    }
}
