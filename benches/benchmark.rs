//! Performance benchmarks for media-sniffer.
//!
//! Run with: `cargo bench`
//!
//! The sample page exercises every extraction pass: playable elements,
//! images, frames, manifest attributes, script text, and hyperlinks.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use media_sniffer::scan;

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Player page</title>
</head>
<body>
    <video src="https://cdn.example.com/main.mp4" poster="https://img.example.com/poster.jpg">
        <source src="https://cdn.example.com/main.webm">
    </video>
    <audio><source src="https://cdn.example.com/theme.mp3"></audio>
    <img src="https://img.example.com/cover.jpg">
    <img src="data:image/png;base64,iVBORw0KGgo=">
    <iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ"></iframe>
    <iframe src="https://play-cdn2.example/e?url=https://cdn.example.com/ep1.m3u8"></iframe>
    <iframe src="https://ads.example.net/slot/728x90"></iframe>
    <source src="https://cdn.example.com/live/index.m3u8">
    <script>
        var sources = ["https://cdn.example.com/hls/1080p.m3u8",
                       "https://mirror.example.com/hls/720p.m3u8"];
        player.load(sources[0]);
    </script>
    <a href="https://files.example.com/full-episode.mp4">download</a>
    <a href="/relative/preview.webm">preview</a>
</body>
</html>
"#;

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(SAMPLE_HTML.len() as u64));
    group.bench_function("synthetic_page", |b| b.iter(|| scan(black_box(SAMPLE_HTML))));
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
