//! Salvo integration: making [`AccessControl`] and the current [`Requester`]
//! available to route handlers through the request depot.

use std::sync::Arc;

use salvo::async_trait;

use crate::error::{ServiceError, ServiceResult};

use super::decision::AccessControl;
use super::lookup::AssignmentLookup;
use super::requester::Requester;

pub mod depot_keys {
    pub const REQUESTER: &str = "__requester";
}

/// Hoop that injects a shared [`AccessControl`] into every request's depot.
pub struct AccessControlHandler<L> {
    pub access: Arc<AccessControl<L>>,
}

#[async_trait]
impl<L> salvo::Handler for AccessControlHandler<L>
where
    L: AssignmentLookup + 'static,
{
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.access));
    }
}

/// ## Summary
/// Retrieves the access control from the depot.
///
/// ## Errors
/// Returns an error if no access control was injected.
pub fn get_access_control_from_depot<L>(
    depot: &salvo::Depot,
) -> ServiceResult<Arc<AccessControl<L>>>
where
    L: AssignmentLookup + 'static,
{
    depot
        .obtain::<Arc<AccessControl<L>>>()
        .cloned()
        .map_err(|_err| ServiceError::InvariantViolation("Access control not found in depot"))
}

/// Store the authenticated requester for later handlers.
pub fn set_requester_in_depot(depot: &mut salvo::Depot, requester: Requester) {
    depot.insert(depot_keys::REQUESTER, requester);
}

/// Get the authenticated requester from the depot.
///
/// ## Errors
///
/// Returns `NotAuthenticated` if no requester has been stored.
pub fn get_requester_from_depot(depot: &salvo::Depot) -> ServiceResult<Requester> {
    depot
        .get::<Requester>(depot_keys::REQUESTER)
        .copied()
        .map_err(|_e| ServiceError::NotAuthenticated)
}
