#![allow(missing_docs)]

use lazywrap::config::{ConfigSource, COMPRESS_PLAN_DEFAULT, COMPRESS_PLAN_KEY};
use lazywrap::{envelope, CodecStrategy, FastCodec, LazywrapError, MapConfig, StructuralCodec};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
struct PlanNode {
    op: String,
    children: Vec<PlanNode>,
}

fn sample_plan() -> PlanNode {
    PlanNode {
        op: "project".into(),
        children: vec![
            PlanNode {
                op: "filter".into(),
                children: vec![PlanNode {
                    op: "scan".into(),
                    children: vec![],
                }],
            },
        ],
    }
}

fn disabled_config() -> MapConfig {
    let mut conf = MapConfig::new();
    conf.set(COMPRESS_PLAN_KEY, "false");
    conf
}

fn enabled_config() -> MapConfig {
    let mut conf = MapConfig::new();
    conf.set(COMPRESS_PLAN_KEY, "true");
    conf
}

// --- FAST CODEC ---

#[test]
fn fast_codec_round_trip() -> lazywrap::Result<()> {
    let values: Vec<(u64, String)> = (0..100).map(|i| (i, format!("row-{i}"))).collect();
    let bytes = FastCodec::encode(&values)?;
    let decoded: Vec<(u64, String)> = FastCodec::decode(&bytes)?;
    assert_eq!(decoded, values);
    Ok(())
}

#[test]
fn fast_codec_type_mismatch_fails() {
    let bytes = FastCodec::encode(&"not a number".to_string()).expect("encode");
    let err = FastCodec::decode::<Vec<u64>>(&bytes).unwrap_err();
    assert!(matches!(err, LazywrapError::Codec(_)));
}

// --- STRUCTURAL CODEC ---

#[test]
fn structural_round_trip_compression_disabled() -> lazywrap::Result<()> {
    let codec = StructuralCodec::with_config(&disabled_config());
    assert!(!codec.compression_enabled());

    let plan = sample_plan();
    let bytes = codec.encode(&plan)?;
    assert_eq!(bytes[0], envelope::RAW_TAG);

    let decoded: PlanNode = codec.decode(&bytes)?;
    assert_eq!(decoded, plan);
    Ok(())
}

#[test]
fn structural_round_trip_compression_enabled() -> lazywrap::Result<()> {
    let codec = StructuralCodec::with_config(&enabled_config());
    assert!(codec.compression_enabled());

    let plan = sample_plan();
    let bytes = codec.encode(&plan)?;
    assert_eq!(bytes[0], envelope::COMPRESSED_TAG);

    let decoded: PlanNode = codec.decode(&bytes)?;
    assert_eq!(decoded, plan);
    Ok(())
}

#[test]
fn decoder_needs_no_producer_configuration() -> lazywrap::Result<()> {
    // Producer compresses, consumer was configured not to. The envelope tag
    // alone must drive decoding.
    let producer = StructuralCodec::with_config(&enabled_config());
    let consumer = StructuralCodec::with_config(&disabled_config());

    let plan = sample_plan();
    let bytes = producer.encode(&plan)?;
    let decoded: PlanNode = consumer.decode(&bytes)?;
    assert_eq!(decoded, plan);
    Ok(())
}

#[cfg(feature = "lz4_flex")]
#[test]
fn compression_shortens_realistic_plans() -> lazywrap::Result<()> {
    // A plan with heavy repetition, the realistic shape of query plans.
    let plan = PlanNode {
        op: "union".into(),
        children: (0..200)
            .map(|_| PlanNode {
                op: "scan-partition-with-a-long-repetitive-operator-name".into(),
                children: vec![],
            })
            .collect(),
    };

    let raw_bytes = StructuralCodec::with_config(&disabled_config()).encode(&plan)?;
    let comp_bytes = StructuralCodec::with_config(&enabled_config()).encode(&plan)?;

    assert_eq!(raw_bytes[0], envelope::RAW_TAG);
    assert_eq!(comp_bytes[0], envelope::COMPRESSED_TAG);
    assert_ne!(raw_bytes.len(), comp_bytes.len());
    assert!(comp_bytes.len() < raw_bytes.len());

    let from_raw: PlanNode = StructuralCodec::new().decode(&raw_bytes)?;
    let from_comp: PlanNode = StructuralCodec::new().decode(&comp_bytes)?;
    assert_eq!(from_raw, from_comp);
    Ok(())
}

#[test]
fn structural_decode_rejects_malformed_framing() {
    let codec = StructuralCodec::new();
    let err = codec.decode::<PlanNode>(&[]).unwrap_err();
    assert!(matches!(err, LazywrapError::MalformedEnvelope(_)));

    let err = codec.decode::<PlanNode>(&[9, 1, 2]).unwrap_err();
    assert!(matches!(err, LazywrapError::MalformedEnvelope(_)));
}

// --- CONFIG RESOLUTION ---

#[test]
fn missing_key_falls_back_to_static_default() {
    let codec = StructuralCodec::with_config(&MapConfig::new());
    assert_eq!(codec.compression_enabled(), COMPRESS_PLAN_DEFAULT);

    let codec = StructuralCodec::new();
    assert_eq!(codec.compression_enabled(), COMPRESS_PLAN_DEFAULT);
}

#[test]
fn map_config_parses_case_insensitively() {
    let mut conf = MapConfig::new();
    conf.set(COMPRESS_PLAN_KEY, "FALSE");
    assert!(!conf.get_bool(COMPRESS_PLAN_KEY, true));

    conf.set(COMPRESS_PLAN_KEY, "True");
    assert!(conf.get_bool(COMPRESS_PLAN_KEY, false));

    conf.set(COMPRESS_PLAN_KEY, "not-a-bool");
    assert!(conf.get_bool(COMPRESS_PLAN_KEY, true));
}

// --- STRATEGY OVERRIDES ---

/// An enumeration-like value whose generic structural encoding we want to
/// bypass with an explicit single-byte strategy.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy)]
enum JoinSide {
    Left,
    Right,
}

#[derive(Debug)]
struct JoinSideStrategy {
    encodes: Arc<AtomicUsize>,
    decodes: Arc<AtomicUsize>,
}

impl CodecStrategy for JoinSideStrategy {
    fn encode(&self, value: &dyn Any) -> lazywrap::Result<Vec<u8>> {
        self.encodes.fetch_add(1, Ordering::SeqCst);
        let side = value
            .downcast_ref::<JoinSide>()
            .ok_or_else(|| LazywrapError::Codec("expected JoinSide".into()))?;
        Ok(vec![match side {
            JoinSide::Left => 0,
            JoinSide::Right => 1,
        }])
    }

    fn decode(&self, bytes: &[u8]) -> lazywrap::Result<Box<dyn Any>> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        match bytes {
            [0] => Ok(Box::new(JoinSide::Left)),
            [1] => Ok(Box::new(JoinSide::Right)),
            _ => Err(LazywrapError::Codec("invalid JoinSide byte".into())),
        }
    }
}

#[test]
fn strategy_override_wins_over_generic_path() -> lazywrap::Result<()> {
    let encodes = Arc::new(AtomicUsize::new(0));
    let decodes = Arc::new(AtomicUsize::new(0));

    let mut codec = StructuralCodec::with_config(&disabled_config());
    codec.register_strategy::<JoinSide>(Box::new(JoinSideStrategy {
        encodes: Arc::clone(&encodes),
        decodes: Arc::clone(&decodes),
    }));

    let bytes = codec.encode(&JoinSide::Right)?;
    // Envelope tag plus the strategy's single byte.
    assert_eq!(bytes, vec![envelope::RAW_TAG, 1]);

    let decoded: JoinSide = codec.decode(&bytes)?;
    assert_eq!(decoded, JoinSide::Right);

    assert_eq!(encodes.load(Ordering::SeqCst), 1);
    assert_eq!(decodes.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn unregistered_type_uses_generic_path() -> lazywrap::Result<()> {
    // Same enum, no strategy registered: the generic path must round-trip it.
    let codec = StructuralCodec::with_config(&disabled_config());
    let bytes = codec.encode(&JoinSide::Left)?;
    let decoded: JoinSide = codec.decode(&bytes)?;
    assert_eq!(decoded, JoinSide::Left);
    Ok(())
}
