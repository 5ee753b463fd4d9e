/// Tests for aggregation, grouping and keyed aggregates
use proptest::prelude::*;
use relq::samples::aggregation::{activity_by_month, activity_by_year_month, city_statistics};
use relq::samples::grouping::{products_by_category, products_by_price_band, PriceBand};
use relq::{aggregate, AsQuery, Dataset, Error, Query, SampleConfig, YearMonth};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_sum_of_order_totals() {
    let dataset = Dataset::sample();
    let alfki = dataset.customer("ALFKI").unwrap();
    assert_eq!(alfki.orders().sum(|o| o.total), dec!(2022.50));

    let fissa = dataset.customer("FISSA").unwrap();
    assert_eq!(fissa.orders().sum(|o| o.total), Decimal::ZERO);
}

#[test]
fn test_min_and_max_fail_on_empty_sequence() {
    let dataset = Dataset::sample();
    let fissa = dataset.customer("FISSA").unwrap();
    assert!(matches!(
        fissa.orders().min(|o| o.order_date),
        Err(Error::EmptySequence(_))
    ));
    assert!(matches!(
        fissa.orders().max(|o| o.total),
        Err(Error::EmptySequence(_))
    ));

    let splir = dataset.customer("SPLIR").unwrap();
    assert_eq!(splir.orders().min(|o| o.total).unwrap(), dec!(48.00));
    assert_eq!(splir.orders().max(|o| o.total).unwrap(), dec!(4578.43));
}

#[test]
fn test_any_order_above_threshold() {
    let dataset = Dataset::sample();
    let large: Vec<&str> = dataset
        .customers()
        .query()
        .filter(|c| c.orders().any(|o| o.total > dec!(1000)))
        .map(|c| c.id.as_str())
        .to_vec();
    assert_eq!(large, ["BONAP", "SPLIR"]);
}

#[test]
fn test_suppliers_grouped_by_location() {
    let dataset = Dataset::sample();
    let groups = dataset
        .suppliers()
        .query()
        .group_by(|s| s.location(), |s| s.supplier_name.as_str())
        .to_vec();

    assert_eq!(groups.len(), 9);
    let london = &groups[0];
    assert_eq!(london.key().to_string(), "London, UK");
    assert_eq!(
        london.values(),
        ["Exotic Liquids", "Thames Valley Provisions"]
    );
    assert!(groups[1..].iter().all(|g| g.len() == 1));
}

#[test]
fn test_products_by_category_stock_and_price() {
    let dataset = Dataset::sample();
    let categories = products_by_category(&dataset).to_vec();

    let names: Vec<&str> = categories.iter().map(|c| *c.key()).collect();
    assert_eq!(names, ["Beverages", "Condiments", "Meat/Poultry"]);

    let beverages = &categories[0];
    assert_eq!(beverages.len(), 1);
    let prices: Vec<Decimal> = beverages.values()[0].iter().map(|p| p.unit_price).collect();
    assert_eq!(
        prices,
        [dec!(4.50), dec!(18.00), dec!(19.00), dec!(46.00), dec!(263.50)]
    );

    let meat = &categories[2];
    let stock: Vec<bool> = meat.iter().map(|g| *g.key()).collect();
    assert_eq!(stock, [true, false]);
    let out_of_stock: Vec<u32> = meat.values()[1].iter().map(|p| p.id).collect();
    assert_eq!(out_of_stock, [53, 17, 29]);
}

#[test]
fn test_price_bands_follow_configuration() {
    let dataset = Dataset::sample();
    let config = SampleConfig::default();
    let bands: Vec<(PriceBand, usize)> = products_by_price_band(&dataset, &config)
        .map(|g| (*g.key(), g.len()))
        .to_vec();
    assert_eq!(
        bands,
        [
            (PriceBand::Cheap, 4),
            (PriceBand::Average, 5),
            (PriceBand::Expensive, 3)
        ]
    );

    let wide = SampleConfig::default().with_price_bands(dec!(100), dec!(200));
    let bands = products_by_price_band(&dataset, &wide)
        .map(|g| (*g.key(), g.len()))
        .to_vec();
    assert_eq!(
        bands,
        [
            (PriceBand::Cheap, 10),
            (PriceBand::Average, 1),
            (PriceBand::Expensive, 1)
        ]
    );
}

#[test]
fn test_city_profitability_and_intensity() {
    let dataset = Dataset::sample();
    let london = city_statistics(&dataset)
        .filter(|s| s.location.city == "London")
        .first()
        .unwrap();

    assert_eq!(london.customers, 2);
    assert_eq!(london.orders, 4);
    assert_eq!(london.average_order, Some(dec!(566.525)));
    assert_eq!(london.orders_per_customer, dec!(2));
}

#[test]
fn test_activity_per_month_and_year_month() {
    let dataset = Dataset::sample();

    let by_month = activity_by_month(&dataset).to_vec();
    let months: Vec<u32> = by_month.iter().map(|a| a.period).collect();
    assert!(months.windows(2).all(|w| w[0] < w[1]));
    let august = by_month.iter().find(|a| a.period == 8).unwrap();
    assert_eq!(august.orders, 4);

    let by_year_month = activity_by_year_month(&dataset).to_vec();
    let oct_1996 = by_year_month
        .iter()
        .find(|a| a.period == YearMonth::new(1996, 10))
        .unwrap();
    assert_eq!(oct_1996.orders, 3);
    assert_eq!(by_year_month[0].period, YearMonth::new(1996, 8));
}

#[test]
fn test_sum_of_single_element() {
    let one = Query::from_source([dec!(12.34)]);
    assert_eq!(one.sum(|d| d * dec!(2)), dec!(24.68));
    assert_eq!(aggregate::count(one.iter()), 1);
}

proptest! {
    #[test]
    fn prop_group_by_partitions(values in prop::collection::vec(0u32..10, 0..100)) {
        let groups = values.query().group_by(|v| **v % 4, |v| *v).to_vec();

        let total: usize = groups.iter().map(|g| g.len()).sum();
        prop_assert_eq!(total, values.len());

        let mut keys: Vec<u32> = groups.iter().map(|g| *g.key()).collect();
        let before = keys.len();
        keys.sort_unstable();
        keys.dedup();
        prop_assert_eq!(keys.len(), before);
    }

    #[test]
    fn prop_sum_over_contiguous_partition(
        cents in prop::collection::vec(0i64..1_000_000, 0..50),
        split in 0usize..50,
    ) {
        let values: Vec<Decimal> = cents.iter().map(|c| Decimal::new(*c, 2)).collect();
        let split = split.min(values.len());
        let whole = values.query().sum(|d| *d);
        let parts = values[..split].query().sum(|d| *d) + values[split..].query().sum(|d| *d);
        prop_assert_eq!(whole, parts);
    }
}
