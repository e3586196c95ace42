//! Static marketing content. Everything here is defined once and consumed
//! read-only by the page sections and controllers.

#[derive(Clone, PartialEq)]
pub struct NotificationEntry {
    pub name: &'static str,
    pub action: &'static str,
    pub subtitle: &'static str,
}

pub const NOTIFICATIONS: [NotificationEntry; 10] = [
    NotificationEntry {
        name: "Maria - SP",
        action: "acaba de iniciar o Jejum com Café Preto.",
        subtitle: "Transformação em corpo e alma começando agora.",
    },
    NotificationEntry {
        name: "Juliana - RJ",
        action: "fez sua inscrição no propósito das 7h.",
        subtitle: "1 xícara. 1 oração. Um novo começo.",
    },
    NotificationEntry {
        name: "Patrícia - MG",
        action: "garantiu acesso ao método sagrado.",
        subtitle: "Escolheu emagrecer com fé e direção divina.",
    },
    NotificationEntry {
        name: "Ana - DF",
        action: "entrou no protocolo espiritual agora mesmo.",
        subtitle: "Decidiu cuidar do corpo com a Palavra como guia.",
    },
    NotificationEntry {
        name: "Fernanda - BA",
        action: "começou o propósito de 14 dias.",
        subtitle: "Café, Bíblia e foco... O milagre começa por dentro.",
    },
    NotificationEntry {
        name: "Simone - SC",
        action: "acaba de acessar o guia completo.",
        subtitle: "+1 mulher quebrando ciclos de ansiedade com fé.",
    },
    NotificationEntry {
        name: "Luciana - AM",
        action: "iniciou seu ritual de jejum e oração.",
        subtitle: "O chamado foi ouvido. O corpo vai responder.",
    },
    NotificationEntry {
        name: "Camila - CE",
        action: "garantiu a oferta especial de R$19,70.",
        subtitle: "Fez da fé seu ponto de partida.",
    },
    NotificationEntry {
        name: "Débora - GO",
        action: "começou o plano de 30 dias.",
        subtitle: "Renovando o espírito e secando o corpo.",
    },
    NotificationEntry {
        name: "Talita - PE",
        action: "escolheu transformar a vida em oração.",
        subtitle: "Agora é ela, Deus e uma xícara de café.",
    },
];

#[derive(Clone, PartialEq)]
pub struct ComparisonImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub result: &'static str,
}

pub const BEFORE_AFTER: [ComparisonImage; 4] = [
    ComparisonImage {
        src: "https://i.postimg.cc/W1jHs5bR/CONVERTER-1.webp",
        alt: "Antes e Depois 1",
        result: "Perdeu 7kg em 2 semanas",
    },
    ComparisonImage {
        src: "https://i.postimg.cc/jdy1VpTQ/CONVERTER-2.webp",
        alt: "Antes e Depois 2",
        result: "Perdeu 5kg em 10 dias",
    },
    ComparisonImage {
        src: "https://i.postimg.cc/vmZ2VDV3/CONVERTER-3.webp",
        alt: "Antes e Depois 3",
        result: "Perdeu 6kg em 3 semanas",
    },
    ComparisonImage {
        src: "https://i.postimg.cc/YC3y0Qhv/CONVERTER-4.webp",
        alt: "Antes e Depois 4",
        result: "Perdeu 4kg em 1 semana",
    },
];

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub image: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        image: "https://i.postimg.cc/CKrPHYCY/DEPOIMENTO-1.webp",
        text: "Comprei com objetivo de emagrecer, mas além disso, reestabeleci minha fé. \
               Em 3 dias minhas enxaquecas cessaram. Perdi 6,4kg em 2 semanas e encontrei paz interior.",
        rating: 5,
    },
    Testimonial {
        image: "https://i.postimg.cc/8cMZS62P/DEPOIMENTO-2.webp",
        text: "Cada manhã com café e oração mudou minha vida. Não é só sobre o peso, \
               é sobre propósito. Me sinto renovada.",
        rating: 5,
    },
    Testimonial {
        image: "https://i.postimg.cc/j5W8M9vf/DEPOIMENTO-3.webp",
        text: "Deus usou esse protocolo para me libertar da ansiedade alimentar. \
               Perdi 5kg e ganhei uma nova perspectiva de vida.",
        rating: 5,
    },
];

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 7] = [
    FaqEntry {
        question: "Jejum com café preto é seguro?",
        answer: "Sim, é um método natural usado há séculos. Sempre consulte um médico \
                 se tiver condições específicas.",
    },
    FaqEntry {
        question: "Posso tomar mais de uma xícara?",
        answer: "O protocolo recomenda 1 xícara em jejum. Mais pode ser consumido \
                 durante o dia conforme tolerância.",
    },
    FaqEntry {
        question: "Posso adaptar o protocolo?",
        answer: "Sim, o guia inclui adaptações para diferentes perfis e necessidades.",
    },
    FaqEntry {
        question: "Como acesso o material?",
        answer: "Imediatamente após a compra, você recebe o acesso por email.",
    },
    FaqEntry {
        question: "Tem grupo de suporte?",
        answer: "Sim, grupo exclusivo no WhatsApp para os primeiros 300 participantes.",
    },
    FaqEntry {
        question: "Funciona mesmo se eu não fizer dieta?",
        answer: "O protocolo é focado no jejum com café. Não requer dieta restritiva.",
    },
    FaqEntry {
        question: "Ajuda com dores de cabeça ou enxaqueca?",
        answer: "Muitas mulheres relataram redução ou desaparecimento das crises, \
                 principalmente ligadas ao jejum e ao café puro, que reduz inflamações. \
                 Resultados podem variar.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_rotation_covers_ten_entries() {
        assert_eq!(NOTIFICATIONS.len(), 10);
    }

    #[test]
    fn carousel_has_four_comparisons() {
        assert_eq!(BEFORE_AFTER.len(), 4);
    }

    #[test]
    fn testimonial_ratings_stay_in_star_range() {
        for t in &TESTIMONIALS {
            assert!((1..=5).contains(&t.rating), "rating {} out of range", t.rating);
        }
    }
}
