//! # Submission Front Door
//!
//! The engine-level entry points a form or ops layer calls to move an
//! item's action lifecycle. `request_action` is the customer-facing write:
//! it gates on shipment delivery and on the eligibility resolver before
//! delegating to the lifecycle, which remains the single point of truth for
//! whether a transition is legal. A calling layer that persists the result
//! must consult these functions first; there is no partial failure to
//! handle because the engine performs no external call.
//!
//! Offering an action the resolver never produced is a programming or UI
//! error, and it is rejected with `IneligibleAction` rather than coerced
//! into the nearest legal request.

use postship_core::{ItemId, PostshipError};
use postship_model::{Item, Shipment};
use postship_state::{ActionKind, ActionRequest, PickupSchedule};

use crate::eligibility::EligibilityPolicy;

/// Initiate an action lifecycle for an item in a shipment.
///
/// # Errors
///
/// - `IneligibleAction` when the shipment is not delivered, when the item
///   is not part of the shipment, or when `kind` is not in the resolver's
///   output for the item's category and the shipping city.
/// - `InvalidTransition` / `MissingRequiredInput` from the lifecycle itself.
pub fn request_action(
    policy: &EligibilityPolicy,
    shipment: &mut Shipment,
    item_id: &ItemId,
    kind: ActionKind,
    request: ActionRequest,
) -> Result<(), PostshipError> {
    if !shipment.is_delivered() {
        return Err(PostshipError::ineligible(
            kind,
            "shipment has not been delivered",
        ));
    }
    let city = shipment.shipping_address.city.clone();
    let item = find_item(shipment, item_id, kind)?;
    if !policy.is_offered(kind, item.category, &city) {
        return Err(PostshipError::ineligible(
            kind,
            "not offered for this item and city",
        ));
    }
    item.action.initiate(kind, request)
}

/// Record ops approval of the item's pending request.
pub fn approve_action(shipment: &mut Shipment, item_id: &ItemId) -> Result<(), PostshipError> {
    let item = find_item_any(shipment, item_id)?;
    item.action.approve()
}

/// Record the scheduled pickup (or exchange visit) for the item.
pub fn schedule_action(
    shipment: &mut Shipment,
    item_id: &ItemId,
    schedule: PickupSchedule,
) -> Result<(), PostshipError> {
    let item = find_item_any(shipment, item_id)?;
    item.action.schedule(schedule)
}

/// Record completion of the scheduled visit. Terminal for the lifecycle.
pub fn complete_pickup(shipment: &mut Shipment, item_id: &ItemId) -> Result<(), PostshipError> {
    let item = find_item_any(shipment, item_id)?;
    item.action.complete_pickup()
}

fn find_item<'a>(
    shipment: &'a mut Shipment,
    item_id: &ItemId,
    kind: ActionKind,
) -> Result<&'a mut Item, PostshipError> {
    shipment
        .item_mut(item_id)
        .ok_or_else(|| PostshipError::ineligible(kind, "item is not part of this shipment"))
}

fn find_item_any<'a>(
    shipment: &'a mut Shipment,
    item_id: &ItemId,
) -> Result<&'a mut Item, PostshipError> {
    shipment
        .item_mut(item_id)
        .ok_or_else(|| PostshipError::ineligible(item_id, "item is not part of this shipment"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use postship_core::{ReturnReason, ShipmentId};
    use postship_model::demo;
    use postship_state::{ActionStatus, ImageAttachment};

    fn delivered_shipment() -> Shipment {
        demo::shipment_by_id(&ShipmentId::new("SHP003")).unwrap()
    }

    fn desk_id() -> ItemId {
        ItemId::new("TSCDESK01")
    }

    fn return_request() -> ActionRequest {
        ActionRequest {
            reason: Some(ReturnReason::DamagedProduct),
            notes: None,
            images: Vec::new(),
        }
    }

    #[test]
    fn test_return_on_delivered_shipment_succeeds() {
        let mut shipment = delivered_shipment();
        let policy = EligibilityPolicy::default();
        request_action(&policy, &mut shipment, &desk_id(), ActionKind::Return, return_request())
            .unwrap();
        let desk = shipment.item(&desk_id()).unwrap();
        assert_eq!(desk.action.status, ActionStatus::ReturnRequested);
    }

    #[test]
    fn test_undelivered_shipment_is_gated() {
        let mut shipment = demo::shipment_by_id(&ShipmentId::new("SHP001")).unwrap();
        let policy = EligibilityPolicy::default();
        let result = request_action(
            &policy,
            &mut shipment,
            &ItemId::new("TSCSMS002"),
            ActionKind::Return,
            return_request(),
        );
        assert!(matches!(result, Err(PostshipError::IneligibleAction { .. })));
    }

    #[test]
    fn test_replacement_for_metro_item_is_rejected() {
        // Noida is a metro, so the desk is offered exchange, not replacement.
        let mut shipment = delivered_shipment();
        let policy = EligibilityPolicy::default();
        let result = request_action(
            &policy,
            &mut shipment,
            &desk_id(),
            ActionKind::Replacement,
            ActionRequest {
                reason: Some(ReturnReason::DamagedProduct),
                notes: None,
                images: vec![ImageAttachment::new("IMG_0001.jpg")],
            },
        );
        assert!(matches!(result, Err(PostshipError::IneligibleAction { .. })));
        assert_eq!(shipment.item(&desk_id()).unwrap().action.status, ActionStatus::None);
    }

    #[test]
    fn test_unknown_item_is_rejected() {
        let mut shipment = delivered_shipment();
        let policy = EligibilityPolicy::default();
        let result = request_action(
            &policy,
            &mut shipment,
            &ItemId::new("TSCGHOST"),
            ActionKind::Return,
            return_request(),
        );
        assert!(matches!(result, Err(PostshipError::IneligibleAction { .. })));
    }

    #[test]
    fn test_full_flow_through_front_door() {
        let mut shipment = delivered_shipment();
        let policy = EligibilityPolicy::default();
        let id = desk_id();

        request_action(
            &policy,
            &mut shipment,
            &id,
            ActionKind::Exchange,
            ActionRequest {
                reason: Some(ReturnReason::QualityNotAsExpected),
                notes: Some("Wobbles at full height".to_string()),
                images: vec![ImageAttachment::new("IMG_0032.jpg")],
            },
        )
        .unwrap();
        approve_action(&mut shipment, &id).unwrap();
        schedule_action(
            &mut shipment,
            &id,
            PickupSchedule {
                date: "Dec 20, 2024".to_string(),
                courier_partner: Some("Delhivery".to_string()),
            },
        )
        .unwrap();
        complete_pickup(&mut shipment, &id).unwrap();

        let desk = shipment.item(&id).unwrap();
        assert_eq!(desk.action.status, ActionStatus::ExchangePickedUp);
        assert_eq!(desk.action.transitions.len(), 4);
    }

    #[test]
    fn test_second_initiation_while_in_flight_is_invalid_transition() {
        let mut shipment = delivered_shipment();
        let policy = EligibilityPolicy::default();
        let id = desk_id();
        request_action(&policy, &mut shipment, &id, ActionKind::Return, return_request()).unwrap();
        approve_action(&mut shipment, &id).unwrap();

        let result =
            request_action(&policy, &mut shipment, &id, ActionKind::Return, return_request());
        assert!(matches!(result, Err(PostshipError::InvalidTransition { .. })));
    }
}
