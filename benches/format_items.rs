use criterion::{criterion_group, criterion_main, Criterion};
use steam_user_inventory::normalize::InventorySchema;
use steam_user_inventory::response::{CurrentInventory, LegacyInventory};

fn criterion_benchmark(c: &mut Criterion) {
    let current: CurrentInventory = serde_json::from_str(include_str!("../src/response/fixtures/inventory_current.json")).unwrap();
    let legacy: LegacyInventory = serde_json::from_str(include_str!("../src/response/fixtures/inventory_legacy.json")).unwrap();
    
    c.bench_function("formats current inventory", |b| b.iter(|| {
        current.format_items();
    }));
    
    c.bench_function("formats legacy inventory", |b| b.iter(|| {
        legacy.format_items();
    }));
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
