use crate::core::pricing::PricingPolicy;
use crate::domain::model::{Item, ItemBox, Product};
use crate::domain::ports::Sellable;

impl Product {
    pub fn new(name: impl Into<String>, retail_price: u32) -> Self {
        Self {
            name: name.into(),
            retail_price,
        }
    }
}

impl Sellable for Product {
    fn selling_price_with(&self, policy: &PricingPolicy) -> u64 {
        policy.selling_price(self.retail_price)
    }

    fn name_list(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

impl ItemBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: impl Into<Item>) {
        let item = item.into();
        tracing::debug!("Adding {:?} to box (now {} items)", item.name_list(), self.items.len() + 1);
        self.items.push(item);
    }

    /// Removes the first child equal to `item`. Returns `false` when nothing matched.
    pub fn remove_item(&mut self, item: &Item) -> bool {
        match self.items.iter().position(|child| child == item) {
            Some(index) => {
                self.items.remove(index);
                tracing::debug!("Removed {:?} from box", item.name_list());
                true
            }
            None => {
                tracing::debug!("{:?} not in box, nothing removed", item.name_list());
                false
            }
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Item>> for ItemBox {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl FromIterator<Item> for ItemBox {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Sellable for ItemBox {
    // saturates instead of wrapping on absurdly large trees
    fn selling_price_with(&self, policy: &PricingPolicy) -> u64 {
        self.items
            .iter()
            .map(|item| item.selling_price_with(policy))
            .fold(0, u64::saturating_add)
    }

    fn name_list(&self) -> Vec<String> {
        self.items.iter().flat_map(|item| item.name_list()).collect()
    }
}

impl Sellable for Item {
    fn selling_price_with(&self, policy: &PricingPolicy) -> u64 {
        match self {
            Item::Product(product) => product.selling_price_with(policy),
            Item::Box(item_box) => item_box.selling_price_with(policy),
        }
    }

    fn name_list(&self) -> Vec<String> {
        match self {
            Item::Product(product) => product.name_list(),
            Item::Box(item_box) => item_box.name_list(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pricing::Rounding;

    fn toiletries() -> ItemBox {
        let mut item_box = ItemBox::new();
        item_box.add_item(Product::new("soap", 60));
        item_box.add_item(Product::new("handwash", 100));
        item_box.add_item(Product::new("perfume", 250));
        item_box
    }

    #[test]
    fn test_product_markup() {
        assert_eq!(Product::new("soap", 60).selling_price(), 66);
        assert_eq!(Product::new("handwash", 100).selling_price(), 110);
        assert_eq!(Product::new("soap", 60).name_list(), vec!["soap"]);
    }

    #[test]
    fn test_box_aggregates_children() {
        let item_box = toiletries();
        assert_eq!(item_box.selling_price(), 451);
        assert_eq!(item_box.name_list(), vec!["soap", "handwash", "perfume"]);
        assert_eq!(item_box.len(), 3);
    }

    #[test]
    fn test_nested_box() {
        let mut outer = ItemBox::new();
        outer.add_item(toiletries());
        outer.add_item(Product::new("watch", 2500));
        assert_eq!(outer.selling_price(), 3201);
        assert_eq!(
            outer.name_list(),
            vec!["soap", "handwash", "perfume", "watch"]
        );
    }

    #[test]
    fn test_empty_box() {
        let item_box = ItemBox::new();
        assert!(item_box.is_empty());
        assert_eq!(item_box.selling_price(), 0);
        assert!(item_box.name_list().is_empty());
        assert_eq!(item_box.describe(), "Price for item list: [] is Rs.0");
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut item_box = ItemBox::new();
        item_box.add_item(Product::new("soap", 60));
        item_box.add_item(Product::new("towel", 200));
        item_box.add_item(Product::new("soap", 60));

        assert!(item_box.remove_item(&Product::new("soap", 60).into()));
        assert_eq!(item_box.name_list(), vec!["towel", "soap"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut item_box = toiletries();
        let before = item_box.name_list();
        assert!(!item_box.remove_item(&Product::new("watch", 2500).into()));
        assert_eq!(item_box.name_list(), before);
    }

    #[test]
    fn test_describe_format() {
        assert_eq!(
            Product::new("soap", 60).describe(),
            "Price for item list: [soap] is Rs.66"
        );
        assert_eq!(
            toiletries().describe(),
            "Price for item list: [soap, handwash, perfume] is Rs.451"
        );
    }

    #[test]
    fn test_show_item_details_writes_line() {
        let mut out = Vec::new();
        Product::new("soap", 60).show_item_details(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Price for item list: [soap] is Rs.66\n"
        );
    }

    #[test]
    fn test_policy_applies_per_leaf() {
        // rounding happens on each product, not on the box total
        let item_box: ItemBox = vec![
            Item::from(Product::new("a", 15)),
            Item::from(Product::new("b", 15)),
        ]
        .into_iter()
        .collect();
        let half_even = PricingPolicy::new(10, Rounding::HalfEven);
        assert_eq!(item_box.selling_price_with(&half_even), 32);
        assert_eq!(Item::from(item_box).describe_with(&half_even), "Price for item list: [a, b] is Rs.32");
    }

    #[test]
    fn test_describe_uses_default_policy() {
        let hamper: Item = vec![Item::from(toiletries()), Item::from(Product::new("watch", 2500))]
            .into_iter()
            .collect::<ItemBox>()
            .into();
        assert_eq!(hamper.describe(), hamper.describe_with(&PricingPolicy::default()));
    }

    #[test]
    fn test_show_item_details_with_policy() {
        let mut out = Vec::new();
        toiletries()
            .show_item_details_with(&mut out, &PricingPolicy::new(0, Rounding::Truncate))
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Price for item list: [soap, handwash, perfume] is Rs.410\n"
        );
    }

    #[test]
    fn test_huge_box_total_saturates() {
        let policy = PricingPolicy::new(u32::MAX, Rounding::Truncate);
        let item_box: ItemBox = (0..200)
            .map(|i| Item::from(Product::new(format!("bar{}", i), u32::MAX)))
            .collect();
        assert_eq!(item_box.selling_price_with(&policy), u64::MAX);
    }
}
