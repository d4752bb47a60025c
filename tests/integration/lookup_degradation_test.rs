// Degradation behaviour when external sources fail or go stale:
// rate catalog falls back to defaults, surge falls back to neutral,
// route lookups fall through to variable pricing, and only a distance
// oracle outage fails the quote. Also covers cache staleness windows
// with a hand-cranked clock.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use farecast::accounts::{DiscountResolver, InMemoryAccountSource};
use farecast::core::cache::ManualClock;
use farecast::core::{DistanceOracleError, Place, PlaceId, PricingError, Result};
use farecast::distance::{DistanceOracle, RouteEstimate};
use farecast::quotes::{BookingType, ModeSelector, PricingMode, QuoteEngine, QuoteRequest};
use farecast::rates::models::VehicleClassId;
use farecast::rates::{InMemoryRateCatalog, RateCard, RateCatalog, RateService};
use farecast::routes::models::{FixedRoute, ZoneId, ZoneRoute};
use farecast::routes::repositories::{FixedRouteLookup, ZoneDirectory, ZoneRouteLookup};
use farecast::routes::{InMemoryRouteIndex, PostcodePrefixDirectory};
use farecast::surge::{
    InMemorySurgeSource, SurgePredicate, SurgeRule, SurgeRuleSource, SurgeService,
};

struct StubOracle(RouteEstimate);

#[async_trait]
impl DistanceOracle for StubOracle {
    async fn estimate(
        &self,
        _origin: &Place,
        _destination: &Place,
        _waypoints: &[Place],
    ) -> std::result::Result<RouteEstimate, DistanceOracleError> {
        Ok(self.0)
    }
}

struct DownOracle;

#[async_trait]
impl DistanceOracle for DownOracle {
    async fn estimate(
        &self,
        _origin: &Place,
        _destination: &Place,
        _waypoints: &[Place],
    ) -> std::result::Result<RouteEstimate, DistanceOracleError> {
        Err(DistanceOracleError::Timeout)
    }
}

struct FailingCatalog;

#[async_trait]
impl RateCatalog for FailingCatalog {
    async fn rate_card(&self, _vehicle_class: &VehicleClassId) -> Result<Option<RateCard>> {
        Err(PricingError::lookup("rate store unreachable"))
    }
}

struct FailingSurgeSource;

#[async_trait]
impl SurgeRuleSource for FailingSurgeSource {
    async fn active_rules(&self) -> Result<Vec<SurgeRule>> {
        Err(PricingError::lookup("surge store unreachable"))
    }
}

struct FailingRouteLookups;

#[async_trait]
impl FixedRouteLookup for FailingRouteLookups {
    async fn find(
        &self,
        _origin: &PlaceId,
        _destination: &PlaceId,
        _vehicle_class: &VehicleClassId,
    ) -> Result<Option<FixedRoute>> {
        Err(PricingError::lookup("route store unreachable"))
    }
}

#[async_trait]
impl ZoneRouteLookup for FailingRouteLookups {
    async fn find(&self, _zone: &ZoneId, _destination: &PlaceId) -> Result<Option<ZoneRoute>> {
        Err(PricingError::lookup("route store unreachable"))
    }
}

#[async_trait]
impl ZoneDirectory for FailingRouteLookups {
    async fn zone_for(&self, _postcode: &str) -> Result<Option<ZoneId>> {
        Err(PricingError::lookup("zone store unreachable"))
    }
}

fn saloon_card() -> RateCard {
    RateCard {
        vehicle_class: "saloon".into(),
        display_name: "Saloon".to_string(),
        description: "Standard saloon car".to_string(),
        base_fare: 500,
        per_mile: 100,
        per_minute: 10,
        per_hour: 2500,
        return_discount_percent: 15,
        capacity: 4,
    }
}

fn request() -> QuoteRequest {
    QuoteRequest {
        pickup: Place::new("pl-home", "1 High Street").with_postcode("CB1 2AB"),
        dropoff: Place::new("pl-airport", "Stansted Airport"),
        waypoints: vec![],
        pickup_at: NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2026, 8, 21).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        ),
        passengers: 2,
        vehicle_class: "saloon".into(),
        booking: BookingType::Transfer { is_return: false },
        corporate_account: None,
    }
}

fn always_on_rule(id: &str, multiplier: Decimal) -> SurgeRule {
    SurgeRule {
        id: id.to_string(),
        name: id.to_string(),
        multiplier,
        active: true,
        predicate: SurgePredicate::DateRange {
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        },
    }
}

fn engine_with(
    catalog: Arc<dyn RateCatalog>,
    surge_source: Arc<dyn SurgeRuleSource>,
    oracle: Arc<dyn DistanceOracle>,
    clock: Arc<ManualClock>,
) -> QuoteEngine {
    let index = Arc::new(InMemoryRouteIndex::empty());
    let zones = Arc::new(PostcodePrefixDirectory::new(vec![]));

    QuoteEngine::new(
        RateService::new(catalog, clock.clone(), Duration::from_secs(300)),
        SurgeService::new(surge_source, clock, Duration::from_secs(60)),
        ModeSelector::new(index.clone(), index, zones, oracle),
        DiscountResolver::new(Arc::new(InMemoryAccountSource::new(vec![]))),
    )
}

fn ten_mile_oracle() -> Arc<dyn DistanceOracle> {
    Arc::new(StubOracle(RouteEstimate {
        distance_miles: 10.0,
        duration_minutes: 25,
    }))
}

#[tokio::test]
async fn test_rate_catalog_outage_falls_back_to_default_rates() {
    let engine = engine_with(
        Arc::new(FailingCatalog),
        Arc::new(InMemorySurgeSource::new(vec![])),
        ten_mile_oracle(),
        Arc::new(ManualClock::new()),
    );

    let breakdown = engine.quote(&request()).await.unwrap();
    // Fallback saloon rates: 500 base + 10mi * 100p
    assert_eq!(breakdown.total, 1500);
}

#[tokio::test]
async fn test_surge_source_outage_prices_without_surge() {
    let engine = engine_with(
        Arc::new(InMemoryRateCatalog::new(vec![saloon_card()])),
        Arc::new(FailingSurgeSource),
        ten_mile_oracle(),
        Arc::new(ManualClock::new()),
    );

    let breakdown = engine.quote(&request()).await.unwrap();
    assert_eq!(breakdown.surge_multiplier, Decimal::ONE);
    assert!(breakdown.applied_surge_rule_ids.is_empty());
    assert_eq!(breakdown.total, 1500);
}

#[tokio::test]
async fn test_route_lookup_outage_falls_through_to_variable() {
    let clock = Arc::new(ManualClock::new());
    let failing = Arc::new(FailingRouteLookups);

    let engine = QuoteEngine::new(
        RateService::new(
            Arc::new(InMemoryRateCatalog::new(vec![saloon_card()])),
            clock.clone(),
            Duration::from_secs(300),
        ),
        SurgeService::new(
            Arc::new(InMemorySurgeSource::new(vec![])),
            clock,
            Duration::from_secs(60),
        ),
        ModeSelector::new(failing.clone(), failing.clone(), failing, ten_mile_oracle()),
        DiscountResolver::new(Arc::new(InMemoryAccountSource::new(vec![]))),
    );

    let breakdown = engine.quote(&request()).await.unwrap();
    assert_eq!(breakdown.mode, PricingMode::Variable);
    assert_eq!(breakdown.total, 1500);
}

#[tokio::test]
async fn test_oracle_outage_fails_variable_quote_distinctly() {
    let engine = engine_with(
        Arc::new(InMemoryRateCatalog::new(vec![saloon_card()])),
        Arc::new(InMemorySurgeSource::new(vec![])),
        Arc::new(DownOracle),
        Arc::new(ManualClock::new()),
    );

    let err = engine.quote(&request()).await.unwrap_err();
    // "Temporarily unable to price", not validation and not "no price"
    assert!(matches!(err, PricingError::RouteUnavailable(_)));
}

#[tokio::test]
async fn test_hourly_quote_unaffected_by_oracle_outage() {
    let engine = engine_with(
        Arc::new(InMemoryRateCatalog::new(vec![saloon_card()])),
        Arc::new(InMemorySurgeSource::new(vec![])),
        Arc::new(DownOracle),
        Arc::new(ManualClock::new()),
    );

    let mut req = request();
    req.booking = BookingType::Hourly { hours: 3 };

    let breakdown = engine.quote(&req).await.unwrap();
    assert_eq!(breakdown.total, 7500);
}

#[tokio::test]
async fn test_surge_rule_changes_propagate_after_ttl() {
    let clock = Arc::new(ManualClock::new());
    let source = Arc::new(InMemorySurgeSource::new(vec![]));
    let engine = engine_with(
        Arc::new(InMemoryRateCatalog::new(vec![saloon_card()])),
        source.clone(),
        ten_mile_oracle(),
        clock.clone(),
    );

    // First quote snapshots the (empty) rule set
    let before = engine.quote(&request()).await.unwrap();
    assert_eq!(before.surge_multiplier, Decimal::ONE);

    // Admin activates a surge rule; within the TTL the old snapshot is served
    source
        .replace(vec![always_on_rule("event", dec!(2.0))])
        .await
        .unwrap();
    let cached = engine.quote(&request()).await.unwrap();
    assert_eq!(cached.surge_multiplier, Decimal::ONE);

    // Past the 60s surge staleness window the new rule takes effect
    clock.advance(Duration::from_secs(61));
    let after = engine.quote(&request()).await.unwrap();
    assert_eq!(after.surge_multiplier, dec!(2.0));
    assert_eq!(after.total, 3000);
}

#[tokio::test]
async fn test_stale_surge_snapshot_outlives_source_outage() {
    // A source that succeeds once, then fails
    struct FlakySource {
        calls: std::sync::atomic::AtomicU32,
    }

    #[async_trait]
    impl SurgeRuleSource for FlakySource {
        async fn active_rules(&self) -> Result<Vec<SurgeRule>> {
            let call = self
                .calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if call == 0 {
                Ok(vec![always_on_rule("event", dec!(1.5))])
            } else {
                Err(PricingError::lookup("surge store unreachable"))
            }
        }
    }

    let clock = Arc::new(ManualClock::new());
    let engine = engine_with(
        Arc::new(InMemoryRateCatalog::new(vec![saloon_card()])),
        Arc::new(FlakySource {
            calls: std::sync::atomic::AtomicU32::new(0),
        }),
        ten_mile_oracle(),
        clock.clone(),
    );

    let fresh = engine.quote(&request()).await.unwrap();
    assert_eq!(fresh.surge_multiplier, dec!(1.5));

    // Source is now down; the expired snapshot still beats losing surge
    clock.advance(Duration::from_secs(120));
    let stale = engine.quote(&request()).await.unwrap();
    assert_eq!(stale.surge_multiplier, dec!(1.5));
}
