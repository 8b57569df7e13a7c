use baseline_eto_rs::eto_pipeline::{
    GapFillPass, LandMask, PixelStats, RasterGeometry, RasterHeader, Result, Surface,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::io::Cursor;

const FILL: u8 = 255;

/// Land everywhere except the first eighth of every row.
struct StripedMask {
    water_columns: u32,
}

impl LandMask for StripedMask {
    fn load_row(&mut self, _y: u32) -> Result<()> {
        Ok(())
    }

    fn classify(&self, x: u32) -> Surface {
        if x < self.water_columns { Surface::Water } else { Surface::Land }
    }
}

fn create_container(geometry: &RasterGeometry, fill_every: usize) -> (RasterHeader, Vec<u8>) {
    let header = RasterHeader::for_reduced(geometry, &PixelStats::from_range(0, 1023).unwrap());
    let mut data = header.encode().to_vec();
    let samples = geometry.sample_count() as usize;
    data.extend((0..samples).map(|i| if i % fill_every == 0 { FILL } else { (i % 250) as u8 }));
    (header, data)
}

fn benchmark_raster_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("gap_fill_sizes");

    for (width, height) in [(1024u32, 256u32), (4096, 256), (8192, 512)] {
        let geometry = RasterGeometry::new(width, height, width / 4, height);
        let (header, input) = create_container(&geometry, 7);

        group.throughput(Throughput::Bytes(geometry.sample_count()));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &input,
            |b, input| {
                let pass = GapFillPass::new(geometry);
                b.iter(|| {
                    let mut mask = StripedMask { water_columns: width / 8 };
                    let mut output = Vec::with_capacity(input.len());
                    pass.run(&mut Cursor::new(black_box(input)), &mut mask, &header, &mut output)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn benchmark_fill_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("gap_fill_density");
    let geometry = RasterGeometry::new(4096, 256, 1024, 256);

    for fill_every in [100usize, 10, 3] {
        let (header, input) = create_container(&geometry, fill_every);
        group.bench_with_input(BenchmarkId::from_parameter(fill_every), &input, |b, input| {
            let pass = GapFillPass::new(geometry);
            b.iter(|| {
                let mut mask = StripedMask { water_columns: 0 };
                let mut output = Vec::with_capacity(input.len());
                pass.run(&mut Cursor::new(black_box(input)), &mut mask, &header, &mut output)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_raster_sizes, benchmark_fill_density);
criterion_main!(benches);
