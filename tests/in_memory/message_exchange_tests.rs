//! Point-to-point messaging over the in-memory transport.

use super::helpers::{Marketplace, NEED_ID, agent, flat_bid, marketplace};
use dav_protocol::protocol::{
    domain::{MessageParams, TopicId},
    ports::TransportError,
    services::NeedError,
};
use futures::StreamExt;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn message_reaches_need_owner(marketplace: Marketplace) {
    let provider = marketplace.need_session("charger_7");
    let owner = marketplace.need_session("drone_owner");
    let mut inbox = owner.messages().await.expect("subscription should open");

    provider
        .send_message(
            MessageParams::new(json!({"status": "arrived"})).with_sender(agent("charger_7")),
        )
        .await
        .expect("message should be sent");
    let received = inbox
        .next()
        .await
        .expect("message should arrive")
        .expect("message should decode");

    assert_eq!(received.topic_id(), &TopicId::from(&agent("drone_owner")));
    assert_eq!(received.message_params().payload(), &json!({"status": "arrived"}));
    assert_eq!(
        received.message_params().sender_id(),
        Some(&agent("charger_7"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn need_owner_cannot_message_itself(marketplace: Marketplace) {
    let owner = marketplace.need_session(NEED_ID);

    let result = owner.send_message(MessageParams::default()).await;

    assert!(matches!(result, Err(NeedError::SelfAddressedMessage)));
    assert!(
        marketplace
            .transport
            .published(&TopicId::from(&agent(NEED_ID)))
            .expect("lookup should succeed")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bids_and_messages_share_the_inbox_without_mixing(marketplace: Marketplace) {
    let provider = marketplace.need_session("charger_7");
    let owner = marketplace.need_session("drone_owner");
    provider
        .send_message(MessageParams::new(json!("hello")))
        .await
        .expect("message should be sent");
    provider
        .create_bid(flat_bid("charger_7", "3"))
        .await
        .expect("bid creation should succeed");
    provider
        .send_message(MessageParams::new(json!("goodbye")))
        .await
        .expect("message should be sent");

    let payloads: Vec<_> = owner
        .messages()
        .await
        .expect("subscription should open")
        .take(2)
        .map(|message| message.expect("message should decode").message_params().payload().clone())
        .collect()
        .await;
    let bid = owner
        .bids()
        .await
        .expect("subscription should open")
        .next()
        .await
        .expect("bid should arrive")
        .expect("bid should decode");

    assert_eq!(payloads, [json!("hello"), json!("goodbye")]);
    assert_eq!(bid.bid_params(), &flat_bid("charger_7", "3"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_publish_surfaces_transport_error(marketplace: Marketplace) {
    marketplace
        .transport
        .reject_publishing("broker read-only")
        .expect("injection should succeed");
    let provider = marketplace.need_session("charger_7");

    let result = provider.send_message(MessageParams::default()).await;

    assert!(matches!(
        result,
        Err(NeedError::Transport(TransportError::Rejected { .. }))
    ));
}
