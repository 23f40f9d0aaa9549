use crate::models::Plant;
use serde::{Deserialize, Serialize};

pub fn format_rand(amount: f64) -> String {
    format!("R{:.2}", amount)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub label: String,
    pub amount: f64,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Anything the shop can sell that is built around a single plant.
pub trait PlantProduct {
    fn price(&self) -> f64;
    fn description(&self) -> String;
    fn plant(&self) -> &Plant;
    fn breakdown(&self) -> Vec<LineItem>;
}

pub struct BasicPlant {
    plant: Plant,
}

impl BasicPlant {
    pub fn new(plant: Plant) -> Self {
        Self { plant }
    }
}

impl PlantProduct for BasicPlant {
    fn price(&self) -> f64 {
        self.plant.base_price
    }

    fn description(&self) -> String {
        format!("{} (Basic)", self.plant.species)
    }

    fn plant(&self) -> &Plant {
        &self.plant
    }

    fn breakdown(&self) -> Vec<LineItem> {
        vec![LineItem::new(self.plant.label(), self.plant.base_price)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotStyle {
    Ceramic,
    Terracotta,
    Modern,
    Vintage,
    Other(String),
}

impl PotStyle {
    pub fn name(&self) -> &str {
        match self {
            PotStyle::Ceramic => "ceramic",
            PotStyle::Terracotta => "terracotta",
            PotStyle::Modern => "modern",
            PotStyle::Vintage => "vintage",
            PotStyle::Other(s) => s,
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            PotStyle::Ceramic => 50.0,
            PotStyle::Terracotta => 35.0,
            PotStyle::Modern => 85.0,
            PotStyle::Vintage => 120.0,
            PotStyle::Other(_) => 40.0,
        }
    }

    pub fn all() -> Vec<PotStyle> {
        vec![
            PotStyle::Ceramic,
            PotStyle::Terracotta,
            PotStyle::Modern,
            PotStyle::Vintage,
        ]
    }
}

impl From<&str> for PotStyle {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "ceramic" => PotStyle::Ceramic,
            "terracotta" => PotStyle::Terracotta,
            "modern" => PotStyle::Modern,
            "vintage" => PotStyle::Vintage,
            other => PotStyle::Other(other.to_string()),
        }
    }
}

impl Default for PotStyle {
    fn default() -> Self {
        PotStyle::Ceramic
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapStyle {
    Classic,
    Modern,
    Festive,
    Elegant,
    Other(String),
}

impl WrapStyle {
    pub fn name(&self) -> &str {
        match self {
            WrapStyle::Classic => "classic",
            WrapStyle::Modern => "modern",
            WrapStyle::Festive => "festive",
            WrapStyle::Elegant => "elegant",
            WrapStyle::Other(s) => s,
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            WrapStyle::Classic => 30.0,
            WrapStyle::Modern => 45.0,
            WrapStyle::Festive => 40.0,
            WrapStyle::Elegant => 65.0,
            WrapStyle::Other(_) => 25.0,
        }
    }

    pub fn all() -> Vec<WrapStyle> {
        vec![
            WrapStyle::Classic,
            WrapStyle::Modern,
            WrapStyle::Festive,
            WrapStyle::Elegant,
        ]
    }
}

impl From<&str> for WrapStyle {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "classic" => WrapStyle::Classic,
            "modern" => WrapStyle::Modern,
            "festive" => WrapStyle::Festive,
            "elegant" => WrapStyle::Elegant,
            other => WrapStyle::Other(other.to_string()),
        }
    }
}

impl Default for WrapStyle {
    fn default() -> Self {
        WrapStyle::Classic
    }
}

pub const BOW_PRICE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    Birthday,
    ThankYou,
    GetWell,
    Congratulations,
    Custom,
    Other(String),
}

impl CardType {
    pub fn name(&self) -> &str {
        match self {
            CardType::Birthday => "birthday",
            CardType::ThankYou => "thank_you",
            CardType::GetWell => "get_well",
            CardType::Congratulations => "congratulations",
            CardType::Custom => "custom",
            CardType::Other(s) => s,
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            CardType::Birthday | CardType::Congratulations => 15.0,
            CardType::ThankYou | CardType::GetWell => 12.0,
            CardType::Custom => 25.0,
            CardType::Other(_) => 10.0,
        }
    }

    pub fn all() -> Vec<CardType> {
        vec![
            CardType::Birthday,
            CardType::ThankYou,
            CardType::GetWell,
            CardType::Congratulations,
            CardType::Custom,
        ]
    }
}

impl From<&str> for CardType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "birthday" => CardType::Birthday,
            "thank_you" | "thankyou" => CardType::ThankYou,
            "get_well" | "getwell" => CardType::GetWell,
            "congratulations" => CardType::Congratulations,
            "custom" => CardType::Custom,
            other => CardType::Other(other.to_string()),
        }
    }
}

impl Default for CardType {
    fn default() -> Self {
        CardType::Birthday
    }
}

pub struct DecorativePotDecorator {
    inner: Box<dyn PlantProduct>,
    style: PotStyle,
    color: String,
}

impl DecorativePotDecorator {
    pub fn new(inner: Box<dyn PlantProduct>) -> Self {
        Self {
            inner,
            style: PotStyle::default(),
            color: "white".into(),
        }
    }

    pub fn with_style(mut self, style: PotStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    fn label(&self) -> String {
        format!("{} {} pot", self.color, self.style.name())
    }
}

impl PlantProduct for DecorativePotDecorator {
    fn price(&self) -> f64 {
        self.inner.price() + self.style.price()
    }

    fn description(&self) -> String {
        format!("{} + {}", self.inner.description(), self.label())
    }

    fn plant(&self) -> &Plant {
        self.inner.plant()
    }

    fn breakdown(&self) -> Vec<LineItem> {
        let mut items = self.inner.breakdown();
        items.push(LineItem::new(self.label(), self.style.price()));
        items
    }
}

pub struct GiftWrappingDecorator {
    inner: Box<dyn PlantProduct>,
    style: WrapStyle,
    ribbon_color: String,
    bow: bool,
}

impl GiftWrappingDecorator {
    pub fn new(inner: Box<dyn PlantProduct>) -> Self {
        Self {
            inner,
            style: WrapStyle::default(),
            ribbon_color: "red".into(),
            bow: true,
        }
    }

    pub fn with_style(mut self, style: WrapStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_ribbon(mut self, color: impl Into<String>) -> Self {
        self.ribbon_color = color.into();
        self
    }

    pub fn with_bow(mut self, bow: bool) -> Self {
        self.bow = bow;
        self
    }


    fn wrap_price(&self) -> f64 {
        self.style.price() + if self.bow { BOW_PRICE } else { 0.0 }
    }
}

impl PlantProduct for GiftWrappingDecorator {
    fn price(&self) -> f64 {
        self.inner.price() + self.wrap_price()
    }

    fn description(&self) -> String {
        let bow = if self.bow { " with bow" } else { "" };
        format!(
            "{} + {} gift wrap{}",
            self.inner.description(),
            self.style.name(),
            bow
        )
    }

    fn plant(&self) -> &Plant {
        self.inner.plant()
    }

    fn breakdown(&self) -> Vec<LineItem> {
        let mut items = self.inner.breakdown();
        items.push(LineItem::new(
            format!("{} gift wrap, {} ribbon", self.style.name(), self.ribbon_color),
            self.style.price(),
        ));
        if self.bow {
            items.push(LineItem::new("bow", BOW_PRICE));
        }
        items
    }
}

pub struct GreetingCardDecorator {
    inner: Box<dyn PlantProduct>,
    card_type: CardType,
    message: String,
    recipient: String,
    sender: String,
}

impl GreetingCardDecorator {
    pub fn new(inner: Box<dyn PlantProduct>) -> Self {
        Self {
            inner,
            card_type: CardType::default(),
            message: String::new(),
            recipient: String::new(),
            sender: String::new(),
        }
    }

    pub fn with_type(mut self, card_type: CardType) -> Self {
        self.card_type = card_type;
        self
    }

    pub fn with_message(
        mut self,
        message: impl Into<String>,
        recipient: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        self.message = message.into();
        self.recipient = recipient.into();
        self.sender = sender.into();
        self
    }

    /// The card as it would be printed, one line per filled-in part.
    pub fn card_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.recipient.is_empty() {
            lines.push(format!("To: {}", self.recipient));
        }
        if !self.message.is_empty() {
            lines.push(self.message.clone());
        }
        if !self.sender.is_empty() {
            lines.push(format!("From: {}", self.sender));
        }
        lines
    }
}

impl PlantProduct for GreetingCardDecorator {
    fn price(&self) -> f64 {
        self.inner.price() + self.card_type.price()
    }

    fn description(&self) -> String {
        format!("{} + {} card", self.inner.description(), self.card_type.name())
    }

    fn plant(&self) -> &Plant {
        self.inner.plant()
    }

    fn breakdown(&self) -> Vec<LineItem> {
        let mut items = self.inner.breakdown();
        let lines = self.card_lines();
        let label = if lines.is_empty() {
            format!("{} card", self.card_type.name())
        } else {
            format!("{} card ({})", self.card_type.name(), lines.join(" / "))
        };
        items.push(LineItem::new(label, self.card_type.price()));
        items
    }
}

/// One add-on chosen at the counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decoration {
    Pot {
        style: PotStyle,
        color: String,
    },
    Wrap {
        style: WrapStyle,
        ribbon_color: String,
        bow: bool,
    },
    Card {
        card_type: CardType,
        message: String,
        recipient: String,
        sender: String,
    },
}

impl Decoration {
    pub fn pot(style: PotStyle) -> Self {
        Decoration::Pot {
            style,
            color: "white".into(),
        }
    }

    pub fn wrap(style: WrapStyle) -> Self {
        Decoration::Wrap {
            style,
            ribbon_color: "red".into(),
            bow: true,
        }
    }

    pub fn card(card_type: CardType) -> Self {
        Decoration::Card {
            card_type,
            message: String::new(),
            recipient: String::new(),
            sender: String::new(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Decoration::Pot { style, color } => format!("{} {} pot", color, style.name()),
            Decoration::Wrap { style, bow, .. } => {
                let bow = if *bow { " with bow" } else { "" };
                format!("{} gift wrap{}", style.name(), bow)
            }
            Decoration::Card { card_type, .. } => format!("{} card", card_type.name()),
        }
    }

    pub fn apply(self, product: Box<dyn PlantProduct>) -> Box<dyn PlantProduct> {
        match self {
            Decoration::Pot { style, color } => Box::new(
                DecorativePotDecorator::new(product)
                    .with_style(style)
                    .with_color(color),
            ),
            Decoration::Wrap {
                style,
                ribbon_color,
                bow,
            } => Box::new(
                GiftWrappingDecorator::new(product)
                    .with_style(style)
                    .with_ribbon(ribbon_color)
                    .with_bow(bow),
            ),
            Decoration::Card {
                card_type,
                message,
                recipient,
                sender,
            } => Box::new(
                GreetingCardDecorator::new(product)
                    .with_type(card_type)
                    .with_message(message, recipient, sender),
            ),
        }
    }
}

/// Wrap a plant in each decoration, in order.
pub fn decorate(plant: Plant, decorations: Vec<Decoration>) -> Box<dyn PlantProduct> {
    decorations
        .into_iter()
        .fold(Box::new(BasicPlant::new(plant)), |product, decoration| {
            decoration.apply(product)
        })
}
