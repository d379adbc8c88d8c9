use clap::{AppSettings, Clap};
use rangemark::record::{denormalize, denormalize_all, RawInterval};

#[derive(Debug, Clap)]
#[clap(version = "1.0", author = "Jonathan Zrake <jonathan.zrake@gmail.com>")]
#[clap(setting = AppSettings::ColoredHelp)]
struct Opts {
    #[clap(short = 'n', long, default_value = "100000")]
    num_records: usize,

    #[clap(short = 't', long, default_value = "0")]
    num_threads: usize,

    #[clap(short = 'r', long, default_value = "300-600,601-900,901-1500,1501-")]
    ranges: String,
}




// ============================================================================
fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    let opts = Opts::parse();
    println!("{:?}", opts);

    if opts.num_threads != 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(opts.num_threads)
            .build_global()
            .unwrap();
    }

    let buckets: Vec<String> = opts.ranges.split(',').map(String::from).collect();
    let raws: Vec<_> = (0..opts.num_records)
        .map(|n| {
            let from = (n % 1000) as i64;
            RawInterval::new(Some(&from.to_string()), Some(&(from + 500).to_string()))
        })
        .collect();

    let (serial, duration) = {
        let start = std::time::Instant::now();
        let records: Vec<_> = raws.iter().map(|raw| denormalize(raw, &buckets)).collect();
        (records, start.elapsed().as_secs_f64())
    };
    println!();
    println!("serial");
    println!("total ................. {}s", duration);
    println!(
        "ns / record ........... {}",
        duration / opts.num_records as f64 * 1e9
    );

    let (parallel, duration) = {
        let start = std::time::Instant::now();
        let records = denormalize_all(&raws, &buckets);
        (records, start.elapsed().as_secs_f64())
    };
    println!();
    println!("rayon::par_iter");
    println!("total ................. {}s", duration);
    println!(
        "ns / record ........... {}",
        duration / opts.num_records as f64 * 1e9
    );

    assert!(serial == parallel);

    let mpk = rmp_serde::encode::to_vec(&parallel).unwrap();
    std::fs::write("records.msgpack", &mpk).unwrap();
    println!();
    println!("wrote {} records ({} bytes) to records.msgpack", opts.num_records, mpk.len());
}
