//! # Sandbox Transports
//!
//! In-process supplier transports for the `dev` profile.
//!
//! Each sandbox answers every search with two fixed offers echoing the
//! request's airports and dates at local midnight. No network is involved,
//! so the full search path can be exercised without supplier credentials.

use crate::infrastructure::suppliers::crazy_air::{CrazyAirSearchRequest, CrazyAirSearchResponse};
use crate::infrastructure::suppliers::error::{SupplierError, SupplierResult};
use crate::infrastructure::suppliers::tough_jet::{ToughJetSearchRequest, ToughJetSearchResponse};
use crate::infrastructure::suppliers::traits::SupplierTransport;
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use rust_decimal::Decimal;

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

/// Local midnight of `date` as a UTC instant.
fn local_midnight_instant(date: NaiveDate) -> SupplierResult<DateTime<Utc>> {
    midnight_instant_in(&Local, date)
}

/// Midnight of `date` in `tz` as a UTC instant.
///
/// When midnight falls in a forward transition gap, the offset in force
/// before the gap is applied, which lands on the first instant after it.
fn midnight_instant_in<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> SupplierResult<DateTime<Utc>> {
    let midnight = start_of_day(date);
    if let Some(local) = tz.from_local_datetime(&midnight).earliest() {
        return Ok(local.with_timezone(&Utc));
    }

    let out_of_range =
        || SupplierError::internal_error(format!("local midnight of {} is out of range", date));
    let day_before = midnight
        .checked_sub_signed(TimeDelta::days(1))
        .ok_or_else(out_of_range)?;
    let offset = tz.offset_from_utc_datetime(&day_before).fix();
    let utc = midnight
        .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
        .ok_or_else(out_of_range)?;
    Ok(Utc.from_utc_datetime(&utc))
}

/// Sandbox CrazyAir: flat fares of 99.99 and 109.99 in economy.
#[derive(Debug, Clone, Default)]
pub struct SandboxCrazyAir;

#[async_trait]
impl SupplierTransport<CrazyAirSearchRequest, CrazyAirSearchResponse> for SandboxCrazyAir {
    async fn send(
        &self,
        request: &CrazyAirSearchRequest,
    ) -> SupplierResult<Vec<CrazyAirSearchResponse>> {
        let offer = |airline: &str, price: Decimal| CrazyAirSearchResponse {
            airline: airline.to_string(),
            price,
            cabin_class: "E".to_string(),
            departure_airport_code: request.origin,
            destination_airport_code: request.destination,
            departure_date: start_of_day(request.departure_date),
            arrival_date: request.return_date.map(start_of_day),
        };

        Ok(vec![
            offer("Foo Airlines", Decimal::new(9999, 2)),
            offer("Bar Airlines", Decimal::new(10999, 2)),
        ])
    }
}

/// Sandbox ToughJet: component fares normalizing to 100.00 and 100.50.
#[derive(Debug, Clone, Default)]
pub struct SandboxToughJet;

#[async_trait]
impl SupplierTransport<ToughJetSearchRequest, ToughJetSearchResponse> for SandboxToughJet {
    async fn send(
        &self,
        request: &ToughJetSearchRequest,
    ) -> SupplierResult<Vec<ToughJetSearchResponse>> {
        let outbound = local_midnight_instant(request.outbound_date)?;
        let inbound = request
            .inbound_date
            .map(local_midnight_instant)
            .transpose()?;

        let offer = |carrier: &str, base: i64, tax: i64, discount: i64| ToughJetSearchResponse {
            carrier: carrier.to_string(),
            base_price: Decimal::from(base),
            tax: Decimal::from(tax),
            discount: Decimal::from(discount),
            departure_airport_name: request.from,
            arrival_airport_name: request.to,
            outbound_date_time: outbound,
            inbound_date_time: inbound,
        };

        Ok(vec![
            offer("Foo Airlines", 100, 10, 10),
            offer("Bar Airlines", 95, 15, 10),
        ])
    }
}
