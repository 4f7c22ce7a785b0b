//! Nest Integration Tests
//!
//! These tests require:
//! - Running Redis instance
//! - Environment variable: REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test nest_tests

use std::collections::{HashMap, HashSet};

use integration_tests::{
    check_test_env, fixtures::*, TestRedis,
};
use nest_cache::{KeyBuilder, Nest, NestError};

// ============================================================================
// Keys
// ============================================================================

#[tokio::test]
async fn test_type_prefixed_keys() {
    if !check_test_env().await {
        return;
    }

    let redis = TestRedis::start().await.expect("Failed to connect");
    let user = User::unique();

    let mut nest = redis.nest_of::<User>();
    assert_eq!(nest.cat(&user.id).key(), format!("User:{}", user.id).as_str());

    nest.cat(&user.id).cat("email").set(&user.email).await.unwrap();
    let mut raw = redis.nest_literal(&format!("User:{}:email", user.id));
    assert_eq!(raw.get().await.unwrap(), Some(user.email.clone()));

    redis.purge(&format!("User:{}", user.id)).await.unwrap();
}

#[tokio::test]
async fn test_fork_builds_below_parent() {
    if !check_test_env().await {
        return;
    }

    let redis = TestRedis::start().await.expect("Failed to connect");
    let user = User::unique();

    let mut record = redis.nest_of::<User>().cat(&user.id).fork();
    record.cat("name").set(&user.name).await.unwrap();
    record.cat("email").set(&user.email).await.unwrap();

    assert_eq!(record.cat("name").get().await.unwrap(), Some(user.name.clone()));
    assert_eq!(record.cat("email").get().await.unwrap(), Some(user.email.clone()));

    assert_eq!(redis.purge(&format!("User:{}", user.id)).await.unwrap(), 2);
}

#[tokio::test]
async fn test_purge_leaves_sibling_records() {
    if !check_test_env().await {
        return;
    }

    let redis = TestRedis::start().await.expect("Failed to connect");
    let id = unique_id();
    let sibling = format!("{id}0");
    let mut nest = redis.nest_of::<User>();

    nest.cat(&id).set("record").await.unwrap();
    nest.cat(&id).cat("name").set("a").await.unwrap();
    nest.cat(&sibling).cat("name").set("b").await.unwrap();

    assert_eq!(redis.purge(&format!("User:{id}")).await.unwrap(), 2);
    assert_eq!(
        nest.cat(&sibling).cat("name").get().await.unwrap().as_deref(),
        Some("b")
    );

    redis.purge(&format!("User:{sibling}")).await.unwrap();
}

// ============================================================================
// Strings
// ============================================================================

#[tokio::test]
async fn test_string_commands() {
    if !check_test_env().await {
        return;
    }

    let redis = TestRedis::start().await.expect("Failed to connect");
    let id = unique_id();
    let mut nest = redis.nest_of::<PageView>();

    assert!(!nest.cat(&id).exists().await.unwrap());
    assert_eq!(nest.cat(&id).get().await.unwrap(), None);

    assert_eq!(nest.cat(&id).set("10").await.unwrap(), "OK");
    assert_eq!(nest.cat(&id).incr().await.unwrap(), 11);
    assert!(nest.cat(&id).exists().await.unwrap());

    assert!(nest.cat(&id).expire(60).await.unwrap());
    assert_eq!(nest.cat(&id).del().await.unwrap(), 1);
    assert_eq!(nest.cat(&id).del().await.unwrap(), 0);
    assert!(!nest.cat("missing").cat(&id).expire(60).await.unwrap());
}

#[tokio::test]
async fn test_json_values() {
    if !check_test_env().await {
        return;
    }

    let redis = TestRedis::start().await.expect("Failed to connect");
    let user = User::unique();

    let mut nest = redis.nest_of::<User>();
    nest.cat(&user.id).set_json(&user).await.unwrap();
    let stored: Option<User> = nest.cat(&user.id).get_json().await.unwrap();
    assert_eq!(stored, Some(user.clone()));

    redis.purge(&format!("User:{}", user.id)).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_increments() {
    if !check_test_env().await {
        return;
    }

    let redis = TestRedis::start().await.expect("Failed to connect");
    let id = unique_id();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let pool = redis.pool.clone();
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            Nest::of::<PageView>(pool).cat(id).incr().await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let mut nest = redis.nest_of::<PageView>();
    assert_eq!(nest.cat(&id).get().await.unwrap().as_deref(), Some("20"));
    nest.cat(&id).del().await.unwrap();
}

#[tokio::test]
async fn test_wrong_type_error_passes_through() {
    if !check_test_env().await {
        return;
    }

    let redis = TestRedis::start().await.expect("Failed to connect");
    let id = unique_id();
    let mut nest = redis.nest_of::<PageView>();

    nest.cat(&id).rpush("a").await.unwrap();
    let err = nest.cat(&id).incr().await.unwrap_err();
    assert!(matches!(err, NestError::Redis(_)));

    // Failed command still returned its connection
    redis.pool.health_check().await.unwrap();
    nest.cat(&id).del().await.unwrap();
}

// ============================================================================
// Hashes
// ============================================================================

#[tokio::test]
async fn test_hash_commands() {
    if !check_test_env().await {
        return;
    }

    let redis = TestRedis::start().await.expect("Failed to connect");
    let user = User::unique();
    let mut nest = redis.nest_of::<User>();

    let hash = HashMap::from([
        ("name".to_string(), user.name.clone()),
        ("email".to_string(), user.email.clone()),
    ]);
    assert_eq!(nest.cat(&user.id).hmset(&hash).await.unwrap(), "OK");

    assert_eq!(nest.cat(&user.id).hgetall().await.unwrap(), hash);
    assert_eq!(
        nest.cat(&user.id).hget("name").await.unwrap(),
        Some(user.name.clone())
    );
    assert_eq!(nest.cat(&user.id).hlen().await.unwrap(), 2);
    assert_eq!(
        nest.cat(&user.id).hkeys().await.unwrap(),
        HashSet::from(["name".to_string(), "email".to_string()])
    );

    assert_eq!(nest.cat(&user.id).hdel("email").await.unwrap(), 1);
    assert_eq!(nest.cat(&user.id).hget("email").await.unwrap(), None);
    assert_eq!(nest.cat(&user.id).hlen().await.unwrap(), 1);

    redis.purge(&format!("User:{}", user.id)).await.unwrap();
}

// ============================================================================
// Sets
// ============================================================================

#[tokio::test]
async fn test_set_commands() {
    if !check_test_env().await {
        return;
    }

    let redis = TestRedis::start().await.expect("Failed to connect");
    let user = User::unique();
    let mut followers = redis.nest_of::<User>().cat(&user.id).cat("followers").fork();

    assert_eq!(followers.sadd("1").await.unwrap(), 1);
    assert_eq!(followers.sadd("2").await.unwrap(), 1);
    assert_eq!(followers.sadd("2").await.unwrap(), 0);
    assert_eq!(
        followers.smembers().await.unwrap(),
        HashSet::from(["1".to_string(), "2".to_string()])
    );

    assert_eq!(followers.srem("1").await.unwrap(), 1);
    assert_eq!(followers.srem("1").await.unwrap(), 0);
    assert_eq!(
        followers.smembers().await.unwrap(),
        HashSet::from(["2".to_string()])
    );

    redis.purge(&format!("User:{}", user.id)).await.unwrap();
}

// ============================================================================
// Lists
// ============================================================================

#[tokio::test]
async fn test_list_commands() {
    if !check_test_env().await {
        return;
    }

    let redis = TestRedis::start().await.expect("Failed to connect");
    let id = unique_id();
    let mut feed = redis.nest_literal("feed").cat(&id).fork();

    for item in ["a", "b", "a", "c"] {
        feed.rpush(item).await.unwrap();
    }
    assert_eq!(feed.llen().await.unwrap(), 4);
    assert_eq!(feed.lrange(0, -1).await.unwrap(), ["a", "b", "a", "c"]);

    assert_eq!(feed.lset(1, "B").await.unwrap(), "OK");
    assert_eq!(feed.lindex(1).await.unwrap().as_deref(), Some("B"));
    assert_eq!(feed.lindex(-1).await.unwrap().as_deref(), Some("c"));
    assert_eq!(feed.lindex(10).await.unwrap(), None);

    assert_eq!(feed.lrem(0, "a").await.unwrap(), 2);
    assert_eq!(feed.lrange(0, -1).await.unwrap(), ["B", "c"]);

    assert!(feed.lset(10, "x").await.is_err());

    redis.purge(&format!("feed:{id}")).await.unwrap();
}

// ============================================================================
// Sorted sets
// ============================================================================

#[tokio::test]
async fn test_sorted_set_commands() {
    if !check_test_env().await {
        return;
    }

    let redis = TestRedis::start().await.expect("Failed to connect");
    let id = unique_id();
    let mut board = redis.nest_of::<Leaderboard>().cat(&id).fork();

    assert_eq!(board.zadd(30.0, "carol").await.unwrap(), 1);
    assert_eq!(board.zadd(10.0, "ada").await.unwrap(), 1);
    assert_eq!(board.zadd(20.0, "bob").await.unwrap(), 1);
    assert_eq!(board.zadd(5.0, "bob").await.unwrap(), 0);

    assert_eq!(board.zcard().await.unwrap(), 3);
    assert_eq!(board.zrange(0, -1).await.unwrap(), ["bob", "ada", "carol"]);
    assert_eq!(board.zrange(0, 0).await.unwrap(), ["bob"]);

    redis.purge(&format!("Leaderboard:{id}")).await.unwrap();
}

// ============================================================================
// Transactions
// ============================================================================

#[tokio::test]
async fn test_multi_runs_block_atomically() {
    if !check_test_env().await {
        return;
    }

    let redis = TestRedis::start().await.expect("Failed to connect");
    let id = unique_id();
    let mut nest = redis.nest_of::<PageView>();
    let key = nest.cat(&id).key();

    let replies = nest
        .multi(|pipe| {
            pipe.cmd("SET").arg(key.as_str()).arg(1);
            pipe.cmd("INCR").arg(key.as_str());
            pipe.cmd("INCR").arg(key.as_str());
        })
        .await
        .unwrap();

    assert_eq!(replies.len(), 3);
    assert_eq!(nest.cat(&id).get().await.unwrap().as_deref(), Some("3"));
    nest.cat(&id).del().await.unwrap();
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_unconfigured_nest_never_connects() {
    let mut nest = Nest::<nest_cache::RedisPool>::unconfigured(KeyBuilder::of::<User>());

    let err = nest.cat(1).get().await.unwrap_err();
    assert!(matches!(err, NestError::PoolNotConfigured));
    assert!(nest.keys().is_accumulating());
}
