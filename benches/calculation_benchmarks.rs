//! Performance benchmarks for the payroll calculation engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Single employee-month (standard method): < 1ms mean
//! - Single employee-month (worked-days method): < 1ms mean
//! - Batch of 100 employee-months: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::SalaryParameters;
use payroll_engine::engine::PayrollEngine;
use payroll_engine::models::{
    Compensation, EmployeeProfile, ScheduleAssignment, ScheduleTemplate, WorkInterval,
};
use payroll_engine::store::InMemoryStore;

use axum::{body::Body, http::Request};
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

/// Mon-Fri, 09:00-17:00 with a one hour break.
fn weekday_template() -> ScheduleTemplate {
    let mut days = HashMap::new();
    for weekday in 1u8..=5 {
        days.insert(
            weekday,
            vec![WorkInterval {
                start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                break_minutes: 60,
            }],
        );
    }
    ScheduleTemplate {
        name: "office_hours".to_string(),
        days,
    }
}

/// Seeds `employee_count` employees, each with a validated January 2026 and
/// a full month of on-time punches.
fn seeded_state(employee_count: usize) -> AppState {
    let mut store = InMemoryStore::new().with_template(weekday_template());
    for i in 0..employee_count {
        let employee_id = format!("emp_bench_{:03}", i);
        store = store
            .with_employee(
                EmployeeProfile {
                    id: employee_id.clone(),
                    full_name: format!("Bench Employee {}", i),
                    position: "Analyst".to_string(),
                    department: "Operations".to_string(),
                    join_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                },
                Compensation {
                    base_salary: Decimal::from(30000 + (i as i64) * 100),
                    hourly_rate: None,
                    // Every third employee carries a negotiated overtime rate
                    overtime_rate: if i % 3 == 0 {
                        Some(Decimal::from(20))
                    } else {
                        None
                    },
                },
            )
            .with_assignment(ScheduleAssignment {
                employee_id: employee_id.clone(),
                template: "office_hours".to_string(),
                effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                effective_to: None,
            })
            .with_validated_month(&employee_id, 1, 2026)
            .with_overtime(&employee_id, 2026, 1, Decimal::from(2));

        for day in 1..=31u32 {
            let date = NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
            if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                continue;
            }
            store = store
                .with_punch(&employee_id, date.and_hms_opt(8, 57, 0).unwrap())
                .with_punch(&employee_id, date.and_hms_opt(17, 4, 0).unwrap());
        }
    }

    let engine = PayrollEngine::new(Arc::new(store), SalaryParameters::default());
    AppState::new(engine)
}

fn single_request_body(employee_id: &str) -> String {
    serde_json::json!({
        "employee_id": employee_id,
        "month": 1,
        "year": 2026
    })
    .to_string()
}

fn batch_request_body(employee_count: usize) -> String {
    let employee_ids: Vec<String> = (0..employee_count)
        .map(|i| format!("emp_bench_{:03}", i))
        .collect();
    serde_json::json!({
        "employee_ids": employee_ids,
        "month": 1,
        "year": 2026,
        "method": "standard"
    })
    .to_string()
}

/// Benchmark: single employee-month through the standard method.
///
/// Target: < 1ms mean
fn bench_single_month_standard(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = seeded_state(1);
    let router = create_router(state);
    let body = single_request_body("emp_bench_000");

    c.bench_function("single_month_standard", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salary/standard")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: single employee-month through the worked-days method.
///
/// Target: < 1ms mean
fn bench_single_month_worked_days(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = seeded_state(1);
    let router = create_router(state);
    let body = single_request_body("emp_bench_000");

    c.bench_function("single_month_worked_days", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salary/worked-days")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 employee-months.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = seeded_state(100);
    let body = batch_request_body(100);

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));
    // Reduce sample size to keep benchmark time reasonable
    group.sample_size(10);

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(state.clone());
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salary/batch")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

/// Benchmark: various batch sizes to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = seeded_state(50);

    let mut group = c.benchmark_group("scaling");

    for employee_count in [1, 5, 10, 25, 50].iter() {
        let router = create_router(state.clone());
        let body = batch_request_body(*employee_count);

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/salary/batch")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_month_standard,
    bench_single_month_worked_days,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
