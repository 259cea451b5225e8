//! Message pump between a transport and the dispatcher.
use anyhow::Result;
use client_frontend_core::{Dispatcher, Transport};

/// Handle messages until the transport closes.
///
/// Each message is dispatched to completion before the next is read. A
/// transport error ends the loop and is returned to the caller.
pub async fn serve<T>(dispatcher: &Dispatcher, transport: &mut T) -> Result<()>
where
    T: Transport + ?Sized,
{
    tracing::info!("Listening for commands");

    while let Some(message) = transport.recv().await? {
        let Some(reply) = dispatcher.handle(&message) else {
            continue;
        };
        transport.send(&message.channel, reply).await?;
    }

    tracing::info!("Transport closed");
    Ok(())
}
