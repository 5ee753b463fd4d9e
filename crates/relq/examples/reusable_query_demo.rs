use relq::{AsQuery, Customer, Dataset, Execute, Query};
use rust_decimal::Decimal;

/// One query definition, parameterized by a threshold at execution time.
fn big_customers(source: &Dataset, threshold: Decimal) -> Query<'_, (&Customer, Decimal)> {
    source
        .customers()
        .query()
        .map(|c| (c, c.turnover()))
        .filter(move |(_, total)| *total > threshold)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== relq Reusable Query Demo ===\n");

    let dataset = Dataset::sample();

    for threshold in [500, 2000, 5000] {
        let threshold = Decimal::from(threshold);
        let found = dataset.execute(|source| big_customers(source, threshold));

        println!("Turnover above {}: {} customers", threshold, found.count());
        // The query is restartable: this is a second pass over the dataset.
        for (customer, total) in found.iter() {
            println!("  {:<40} : {}", customer.company_name, total);
        }
    }

    let map = dataset.execute(|source| {
        big_customers(source, Decimal::from(1000)).to_map(|(c, _)| c.id.clone(), |(_, t)| t)
    })?;
    println!("\nAs a map: {:?}", map);

    Ok(())
}
