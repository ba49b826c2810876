//! Bid creation and consumption over the in-memory transport.

use super::helpers::{Marketplace, NEED_ID, agent, flat_bid, marketplace};
use dav_protocol::protocol::{
    domain::{ProtocolParams, TopicId},
    ports::{TopicTransport, TransportError},
    services::NeedError,
};
use futures::StreamExt;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_bid_reaches_need_inbox(marketplace: Marketplace) {
    let bidder = marketplace.need_session("charger_7");
    let owner = marketplace.need_session("drone_owner");
    let mut inbox = owner.bids().await.expect("subscription should open");

    let created = bidder
        .create_bid(flat_bid("charger_7", "3"))
        .await
        .expect("bid creation should succeed");
    let received = inbox
        .next()
        .await
        .expect("bid should arrive")
        .expect("bid should decode");

    assert_eq!(received.bid_params(), created.bid_params());
    assert_eq!(received.topic_id(), &TopicId::from(&agent("drone_owner")));
    assert_eq!(
        created.topic_id(),
        &marketplace.transport.generate_topic_id(&agent("charger_7"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bid_reply_topic_is_created(marketplace: Marketplace) {
    let bidder = marketplace.need_session("charger_7");

    let created = bidder
        .create_bid(flat_bid("charger_7", "3"))
        .await
        .expect("bid creation should succeed");

    assert!(
        marketplace
            .transport
            .topic_exists(created.topic_id())
            .expect("lookup should succeed")
    );
    assert_eq!(
        marketplace
            .transport
            .published(&TopicId::from(&agent(NEED_ID)))
            .expect("records should decode"),
        vec![ProtocolParams::Bid(flat_bid("charger_7", "3"))]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_topic_creation_publishes_nothing(marketplace: Marketplace) {
    marketplace
        .transport
        .reject_topic_creation("cluster full")
        .expect("injection should succeed");
    let bidder = marketplace.need_session("charger_7");

    let error = bidder
        .create_bid(flat_bid("charger_7", "3"))
        .await
        .expect_err("bid creation should fail");

    assert!(error.to_string().starts_with("Fail to create a topic: "));
    assert!(matches!(
        error,
        NeedError::TopicCreation {
            cause: TransportError::Rejected { .. }
        }
    ));
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
async fn each_subscription_replays_the_inbox(marketplace: Marketplace) {
    let bidder = marketplace.need_session("charger_7");
    let owner = marketplace.need_session("drone_owner");
    bidder
        .create_bid(flat_bid("charger_7", "3"))
        .await
        .expect("bid creation should succeed");
    bidder
        .create_bid(flat_bid("charger_9", "2.5"))
        .await
        .expect("bid creation should succeed");

    for _ in 0..2 {
        let prices: Vec<String> = owner
            .bids()
            .await
            .expect("subscription should open")
            .take(2)
            .map(|bid| bid.expect("bid should decode").bid_params().price().value().to_owned())
            .collect()
            .await;
        assert_eq!(prices, ["3", "2.5"]);
    }
}
