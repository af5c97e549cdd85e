use huffcode::{compress, decompress, HuffmanCodec};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let sample_text = "Every great achievement begins with a simple idea";
    let symbols: Vec<char> = sample_text.chars().collect();
    println!("Original text: {sample_text}");

    let codec = HuffmanCodec::from_symbols(&symbols)?;
    println!("Huffman codes:");
    for (symbol, code) in codec.codes().iter() {
        println!("  {symbol:?} -> {code}");
    }
    print!("{}", codec.tree());

    let encoded = compress(&symbols)?;
    println!("Compressed bits: {}", encoded.bits);
    println!(
        "Compressed to {} bits ({:.1}% of 8 bits per symbol)",
        encoded.bits.len(),
        encoded.compression_ratio() * 100.0
    );

    let decoded: String = decompress(&encoded)?.into_iter().collect();
    if decoded != sample_text {
        return Err("Decompression verification failed".into());
    }
    println!("Decompression successful! Data matches exactly.");

    Ok(())
}
