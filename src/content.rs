//! Copy for the landing page sections.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Visibility,
    NoShow,
    Finance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Card colour scheme on the pricing grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanTone {
    Light,
    Dark,
    Highlight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub note: Option<&'static str>,
    pub badge: Option<&'static str>,
    pub tone: PlanTone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

pub const HERO_IMAGE: &str = "https://i.ibb.co/0RpNCjFf/image.png";

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: FeatureIcon::Visibility,
        title: "Visibilidade Premium",
        description: "Perfil completo com avaliações que atraem novos clientes.",
    },
    Feature {
        icon: FeatureIcon::NoShow,
        title: "Zero No-Show",
        description: "Lembretes automáticos via App e WhatsApp.",
    },
    Feature {
        icon: FeatureIcon::Finance,
        title: "Controle Financeiro",
        description: "Gestão clara de agenda e faturamento.",
    },
];

pub const PLANS: &[Plan] = &[
    Plan {
        name: "GRATUITO",
        price: "R$ 0",
        features: &["Perfil básico", "Contato via WhatsApp"],
        note: Some("Não recebe agendamentos diretos pelo app, avaliações não são exibidas."),
        badge: None,
        tone: PlanTone::Light,
    },
    Plan {
        name: "iTuk STARTER",
        price: "R$ 9,99/mês",
        features: &["Até 20 agendamentos/mês", "Avaliações visíveis", "Ferramentas de gestão"],
        note: None,
        badge: None,
        tone: PlanTone::Dark,
    },
    Plan {
        name: "iTuk PREMIUM",
        price: "R$ 19,99/mês",
        features: &["Agendamentos ilimitados", "Avaliações visíveis", "Todas funcionalidades premium"],
        note: None,
        badge: Some("+ Recomendado"),
        tone: PlanTone::Highlight,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Com o iTuk aumentei meus agendamentos em 40%.",
        name: "Ana",
        role: "Manicure",
        avatar: "https://picsum.photos/id/342/100/100",
    },
    Testimonial {
        quote: "Diminuí quase 100% dos no-shows.",
        name: "Rafael",
        role: "Barbeiro",
        avatar: "https://picsum.photos/id/1005/100/100",
    },
    Testimonial {
        quote: "Finalmente consigo controlar minha agenda e faturamento.",
        name: "Carla",
        role: "Esteticista",
        avatar: "https://picsum.photos/id/1027/100/100",
    },
];
