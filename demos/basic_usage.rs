// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_display::prelude::*;

fn main() {
    println!("=== Decimal Display Example ===\n");

    // Naive float arithmetic vs. decimal-safe arithmetic
    println!("Arithmetic:");
    println!("  naive 0.1 + 0.2      = {}", 0.1 + 0.2);
    println!(
        "  compute 0.1 + 0.2    = {}",
        compute(0.1, Operator::Add, 0.2).result()
    );
    let chained = compute(1.3, Operator::Sub, 1.2)
        .next(Operator::Add, 1.5)
        .next(Operator::Mul, 2.3)
        .next(Operator::Div, 0.2);
    println!("  (1.3-1.2+1.5)*2.3/0.2 = {}\n", chained.result());

    // Prices across many orders of magnitude
    println!("Prices:");
    for price in [64_250.125, 3.14159, 0.04567, 0.000123456, 0.00001234, 1.23e-9] {
        match parse_price(price) {
            Some(rendered) => println!("  {:<14} -> {}", price, rendered),
            None => println!("  {:<14} -> (unformattable)", price),
        }
    }

    // Volumes with magnitude suffixes
    println!("\nVolumes:");
    for volume in [1.5e12, 2.5e9, 1_234_567.0, 15_000.0, 999.0, 0.5] {
        let default = parse_with_unit(volume, UnitKind::Default);
        let tvl = parse_with_unit(volume, UnitKind::Tvl);
        println!(
            "  {:<14} -> {:<10} (tvl: {})",
            volume,
            default.map(|r| r.to_string()).unwrap_or_default(),
            tvl.map(|r| r.to_string()).unwrap_or_default()
        );
    }

    // Amounts
    println!("\nAmounts:");
    println!("  {}", money_format(10_000_000, &MoneyFormat::new()));
    println!(
        "  {}",
        money_format(
            10_000_000,
            &MoneyFormat::new().with_decimals(3).with_thousands_sep("-")
        )
    );

    println!("\n=== Example Complete ===");
}
