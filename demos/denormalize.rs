use clap::{AppSettings, Clap};
use log::info;
use rangemark::record::{denormalize, RawInterval};

#[derive(Debug, Clap)]
#[clap(version = "1.0", author = "Jonathan Zrake <jonathan.zrake@gmail.com>")]
#[clap(setting = AppSettings::ColoredHelp)]
struct Opts {
    #[clap(long)]
    from: Option<String>,

    #[clap(long)]
    till: Option<String>,

    #[clap(short = 'r', long, default_value = "300-600,601-900,901-1500")]
    ranges: String,
}




// ============================================================================
fn main() {
    simple_logger::SimpleLogger::new().init().unwrap();

    let opts = Opts::parse();
    let buckets: Vec<String> = opts.ranges.split(',').map(String::from).collect();
    let raw = RawInterval {
        from: opts.from,
        till: opts.till,
    };

    match denormalize(&raw, &buckets) {
        Some(record) => {
            info!("assembled record for [{}, {}]", record.from, record.till);

            for (descriptor, flag) in &record.ranges {
                println!("{:12} ... {}", descriptor, flag);
            }

            let file = std::fs::File::create("record.cbor").unwrap();
            let mut buffer = std::io::BufWriter::new(file);
            ciborium::ser::into_writer(&record, &mut buffer).unwrap();
            println!("wrote record.cbor");
        }
        None => {
            println!("blank submission, nothing to store");
        }
    }
}
