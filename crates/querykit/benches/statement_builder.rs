use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use querykit::{QueryBuilder, table};

/// select col0, ... from t where col0 = $1 and col1 = $2 ...
fn select_builder(n: usize) -> QueryBuilder {
    let mut qb = table("t");
    qb.select((0..n).map(|i| format!("col{i}")));
    for i in 0..n {
        qb.and_where(&format!("col{i}"), "=", i as i64);
    }
    qb
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/select");

    for n in [1, 5, 10, 50] {
        let qb = select_builder(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.build()));
        });
    }

    group.finish();
}

fn bench_select_with_joins(c: &mut Criterion) {
    c.bench_function("statement_builder/select_joins", |b| {
        b.iter(|| {
            let mut qb = table("orders");
            qb.select(["orders.id", "customers.name", "products.name as product_name"])
                .left_join("customers", "customers.id = orders.customer_id")
                .inner_join("order_items", "order_items.order_id = orders.id")
                .left_join("products", "products.id = order_items.product_id")
                .and_where("orders.status", "=", "completed")
                .order_by("orders.id")
                .limit(50);
            black_box(qb.build());
        });
    });
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/insert");

    for n in [5, 20, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut qb = table("t");
                qb.insert((0..n).map(|i| (format!("col{i}"), i as i64)));
                black_box(qb.build());
            });
        });
    }

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    c.bench_function("statement_builder/update", |b| {
        b.iter(|| {
            let mut qb = table("users");
            qb.set("name", "Jane Doe")
                .set("email", "jane@example.com")
                .and_where("id", "=", 1);
            black_box(qb.build());
        });
    });
}

fn bench_delete(c: &mut Criterion) {
    c.bench_function("statement_builder/delete", |b| {
        b.iter(|| {
            let mut qb = table("users");
            qb.delete().and_where("id", "=", 1);
            black_box(qb.build());
        });
    });
}

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/sanitize");

    for input in ["users.id", "created_at", "users; DROP TABLE accounts; --"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), &input, |b, input| {
            b.iter(|| black_box(querykit::safe_identifier(input)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_select,
    bench_select_with_joins,
    bench_insert,
    bench_update,
    bench_delete,
    bench_sanitize
);
criterion_main!(benches);
