// Performance benchmarks for the btshow UDP codec
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use btshow::tracker::structs::info_hash::InfoHash;
use btshow::udp::enums::action::Action;
use btshow::udp::enums::response::Response;
use btshow::udp::structs::connection_id::ConnectionId;
use btshow::udp::structs::scrape_response::ScrapeResponse;
use btshow::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use btshow::udp::structs::transaction_id::TransactionId;
use btshow::udp::udp::{decode_response, encode_scrape, parse_scrape_statistics, scrape_response_size};

fn random_info_hash() -> InfoHash {
    use rand::RngExt;
    let bytes: [u8; 20] = rand::rng().random();
    InfoHash(bytes)
}

fn scrape_response(count: usize) -> Vec<u8> {
    Response::from(ScrapeResponse {
        transaction_id: TransactionId(1),
        torrent_stats: vec![TorrentScrapeStatistics { seeders: 5, completed: 1, leechers: 3 }; count],
    }).write_to_vec().unwrap()
}

fn bench_encode_scrape(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_scrape");
    for count in [1usize, 10, 74] {
        let info_hashes: Vec<InfoHash> = (0..count).map(|_| random_info_hash()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &info_hashes, |b, info_hashes| {
            b.iter(|| encode_scrape(black_box(ConnectionId(42)), black_box(info_hashes)))
        });
    }
    group.finish();
}

fn bench_decode_scrape_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_scrape_response");
    for count in [1usize, 10, 74] {
        let bytes = scrape_response(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &bytes, |b, bytes| {
            b.iter(|| {
                let validated = decode_response(black_box(bytes), Action::Scrape, TransactionId(1), scrape_response_size(count)).unwrap();
                parse_scrape_statistics(validated, count).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_write_scrape_response(c: &mut Criterion) {
    let response = Response::from(ScrapeResponse {
        transaction_id: TransactionId(1),
        torrent_stats: vec![TorrentScrapeStatistics::default(); 74],
    });
    c.bench_function("write_scrape_response_74", |b| {
        b.iter(|| black_box(&response).write_to_vec().unwrap())
    });
}

criterion_group!(
    benches,
    bench_encode_scrape,
    bench_decode_scrape_response,
    bench_write_scrape_response
);

criterion_main!(benches);
