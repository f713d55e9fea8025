use std::time::Duration;

use roster_core::{DisplayError, Effect, Item, Membership, Msg};
use roster_engine::{
    format_error, EngineEvent, EngineHandle, FetchError, Group, OwnerId, SourceSettings,
    Subscription,
};
use roster_logging::{roster_info, roster_warn};

/// Executes core effects against the engine and turns engine events into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: SourceSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Starts the fetches; returns the last view emitted by `effects`, if any.
    pub fn enqueue(&self, effects: Vec<Effect>) -> Option<Vec<Item>> {
        let mut emitted = None;
        for effect in effects {
            match effect {
                Effect::FetchAll { request } => {
                    roster_info!("FetchAll request={}", request);
                    self.engine.fetch_all(request);
                }
                Effect::FetchMemberships { request, owner_id } => {
                    roster_info!(
                        "FetchMemberships request={} owner_id={}",
                        request,
                        owner_id
                    );
                    self.engine.fetch_memberships(request, owner_id);
                }
                Effect::EmitView(items) => {
                    emitted = Some(items);
                }
            }
        }
        emitted
    }

    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(msg_from_event)
    }
}

pub fn msg_from_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ItemsFetched { request, result } => Msg::ItemsLoaded {
            request,
            result: result
                .map(|groups| groups.into_iter().map(item_from_group).collect())
                .map_err(|err| {
                    roster_warn!("Items request {} failed: {}", request, err);
                    display_error(&err)
                }),
        },
        EngineEvent::MembershipsFetched {
            request,
            owner_id,
            result,
        } => Msg::MembershipsLoaded {
            request,
            result: result
                .map(|subs| {
                    subs.into_iter()
                        .map(|sub| membership_from_subscription(sub, owner_id))
                        .collect()
                })
                .map_err(|err| {
                    roster_warn!(
                        "Memberships request {} for owner {} failed: {}",
                        request,
                        owner_id,
                        err
                    );
                    display_error(&err)
                }),
        },
    }
}

pub fn display_error(err: &FetchError) -> DisplayError {
    let formatted = format_error(err);
    DisplayError::new(formatted.status, formatted.message)
}

fn item_from_group(group: Group) -> Item {
    Item::new(group.id, group.name, group.description.unwrap_or_default())
}

/// `requested_owner` stands in when the payload omits `userId`.
fn membership_from_subscription(
    subscription: Subscription,
    requested_owner: OwnerId,
) -> Membership {
    Membership {
        item_id: subscription.group_id,
        owner_id: subscription.user_id.unwrap_or(requested_owner),
    }
}
