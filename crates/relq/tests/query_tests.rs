/// Tests for filtering, projection and predicate composition
use relq::predicate::{gt, is_blank};
use relq::{AsQuery, ContactRules, Customer, Dataset, Predicate, Query, YearMonth};
use rust_decimal_macros::dec;
use std::cell::Cell;

fn ids<'a>(query: &Query<'a, &'a Customer>) -> Vec<&'a str> {
    query.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_filter_numbers_below_five() {
    let numbers = [5, 4, 1, 3, 9, 8, 6, 7, 2, 0];
    let low = numbers.query().filter(|n| **n < 5).cloned();
    assert_eq!(low.to_vec(), vec![4, 1, 3, 2, 0]);
}

#[test]
fn test_filter_products_in_stock() {
    let dataset = Dataset::sample();
    let in_stock = dataset.products().query().filter(|p| p.units_in_stock > 0);

    let products: Vec<u32> = in_stock.iter().map(|p| p.id).collect();
    assert_eq!(products, vec![1, 2, 3, 4, 9, 24, 38, 43]);
    assert!(in_stock.all(|p| p.in_stock()));
}

#[test]
fn test_filter_is_order_preserving_subset() {
    let dataset = Dataset::sample();
    let all = dataset.customers().query();
    let uk = all.clone().filter(|c| c.country == "UK");

    let all_ids = ids(&all);
    let uk_ids = ids(&uk);
    assert_eq!(uk_ids, ["AROUT", "BSBEV"]);

    // Every kept element appears in the source, in the same relative order.
    let positions: Vec<usize> = uk_ids
        .iter()
        .map(|id| all_ids.iter().position(|a| a == id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_projection_is_lazy_and_restartable() {
    let dataset = Dataset::sample();
    let projected = Cell::new(0);
    let names = dataset.customers().query().map(|c| {
        projected.set(projected.get() + 1);
        c.company_name.as_str()
    });
    assert_eq!(projected.get(), 0);

    assert_eq!(names.clone().take(2).count(), 2);
    assert_eq!(projected.get(), 2);

    assert_eq!(names.count(), 10);
    assert_eq!(names.count(), 10);
}

#[test]
fn test_predicates_compose() {
    let dataset = Dataset::sample();
    let big_spender = gt(|c: &Customer| c.turnover(), dec!(1000));
    let no_region = is_blank(Customer::region);

    let both = big_spender.clone().and(no_region.clone());
    let either = big_spender.clone().or(no_region.clone());
    let neither = Predicate::any_of([big_spender, no_region]).not();

    let customers = dataset.customers().query();
    assert_eq!(
        ids(&customers.clone().filter_by(&both)),
        ["ALFKI", "AROUT", "BONAP"]
    );
    assert_eq!(ids(&customers.clone().filter_by(&either)).len(), 7);
    assert_eq!(
        ids(&customers.filter_by(&neither)),
        ["GREAL", "HUNGC", "LAZYK"]
    );
}

#[test]
fn test_malformed_contact_records() {
    let dataset = Dataset::sample();
    let rules = ContactRules::with_defaults().unwrap();
    let flagged = dataset
        .customers()
        .query()
        .filter_by(&rules.malformed_contact());

    assert_eq!(
        ids(&flagged),
        ["ALFKI", "ANATR", "AROUT", "BSBEV", "BONAP", "FISSA", "HUNGC", "LAZYK"]
    );
}

#[test]
fn test_nested_relation_queries() {
    let dataset = Dataset::sample();
    let alfki = dataset.customer("ALFKI").unwrap();

    let late_1997 = alfki
        .orders()
        .filter(|o| o.year_month() >= YearMonth::new(1997, 10));
    assert_eq!(late_1997.map(|o| o.id).to_vec(), vec![10692, 10702]);
    assert_eq!(dataset.orders().filter(|(c, _)| c.id == "AROUT").count(), 3);
}
