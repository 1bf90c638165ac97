//! Processor Task - inbound event and API request processing
//!
//! This module contains the processing loop that drives a [`GattClient`]
//! from the static channels: inbound transport events on one side, API
//! requests from application tasks on the other. Everything is handled
//! synchronously, one item at a time, so all discovery state mutation stays
//! on this task.
//!
//! # Usage
//!
//! Spawn [`run`] as an Embassy task and talk to it through the
//! [`crate::api`] module:
//!
//! ```rust,ignore
//! spawner.spawn(gatt_task(transport)).unwrap();
//!
//! // elsewhere:
//! gattling::api::start_discovery(conn).await?;
//! ```
//!
//! Transport glue (typically an interrupt handler or a controller read
//! loop) feeds events in with [`crate::api::deliver_event`] or
//! [`crate::api::try_deliver_event`].

use crate::discovery::{DiscoveryListener, GattRequester};
use crate::{EVENT_CHANNEL, GattClient, REQUEST_CHANNEL, RESPONSE_CHANNEL, Request, Response};
use embassy_futures::select::{Either, select};

/// Run the GATT client processing loop
///
/// Selects between inbound transport events and API requests and drives the
/// client synchronously. Never returns.
pub async fn run<R: GattRequester, L: DiscoveryListener>(
    client: &mut GattClient<'_, R>,
    listener: &mut L,
) -> ! {
    let event_receiver = EVENT_CHANNEL.receiver();
    let request_receiver = REQUEST_CHANNEL.receiver();
    let response_sender = RESPONSE_CHANNEL.sender();

    loop {
        match select(event_receiver.receive(), request_receiver.receive()).await {
            Either::First(event) => {
                defmt::debug!("[GATTC] event: {:?}", defmt::Debug2Format(&event));
                client.handle_event(&event, listener);
            }
            Either::Second(request) => {
                defmt::debug!("[GATTC] request: {:?}", defmt::Debug2Format(&request));
                let response = match request {
                    Request::StartDiscovery(conn_handle) => {
                        match client.start_discovery(conn_handle) {
                            Ok(()) => Response::DiscoveryStarted,
                            Err(e) => {
                                defmt::warn!(
                                    "[GATTC] discovery start failed: {:?}",
                                    defmt::Debug2Format(&e)
                                );
                                Response::Error(e)
                            }
                        }
                    }
                    Request::CancelDiscovery => {
                        client.cancel_discovery();
                        Response::DiscoveryCancelled
                    }
                };
                response_sender.send(response).await;
            }
        }
    }
}
