// Prompt builders for the content tools
use crate::application::generative_model::{ResponseSchema, SchemaType};

pub const TITLE_COUNT: usize = 10;
pub const TAG_COUNT: usize = 20;
pub const TREND_MONTHS: usize = 6;

pub fn titles_prompt(topic: &str, tone: &str) -> String {
    format!(
        "Gere {TITLE_COUNT} títulos altamente clicáveis e virais para um vídeo do YouTube sobre \"{topic}\".\n\
         O tom deve ser {tone}.\n\
         Retorne APENAS a lista de títulos, um por linha, sem numeração ou texto adicional.\n\
         Use gatilhos mentais como curiosidade, urgência e benefício."
    )
}

pub fn script_prompt(title: &str, duration: &str) -> String {
    format!(
        "Crie um roteiro completo para um vídeo do YouTube com o título: \"{title}\".\n\
         Duração estimada: {duration}.\n\
         Estrutura:\n\
         1. Gancho (Hook) - 0:00 a 0:30\n\
         2. Introdução - 0:30 a 1:00\n\
         3. Conteúdo Principal (dividido em 3 pontos chave)\n\
         4. Conclusão e CTA (Call to Action)\n\
         \n\
         Formate usando Markdown com negrito para as seções. Seja direto e engajador."
    )
}

pub fn tags_prompt(topic: &str) -> String {
    format!(
        "Gere {TAG_COUNT} tags de SEO de alta conversão para um vídeo sobre \"{topic}\".\n\
         Retorne as tags separadas por vírgula. Apenas as tags."
    )
}

pub fn trends_prompt(topic: &str) -> String {
    format!(
        "Aja como um analista de dados do YouTube. Estime o interesse de busca e a competição \
         para o nicho \"{topic}\" ao longo dos próximos {TREND_MONTHS} meses.\n\
         \n\
         Retorne os dados estritamente em formato JSON seguindo este schema:\n\
         Array de objetos, onde cada objeto tem:\n\
         - \"month\" (string, ex: \"Jan\")\n\
         - \"interest\" (number, 0-100)\n\
         - \"competition\" (number, 0-100)\n\
         \n\
         Gere {TREND_MONTHS} meses de dados."
    )
}

/// Array of `{month, interest, competition}`, all required
pub fn trends_schema() -> ResponseSchema {
    ResponseSchema::array(ResponseSchema::object(vec![
        ("month", ResponseSchema::scalar(SchemaType::String)),
        ("interest", ResponseSchema::scalar(SchemaType::Number)),
        ("competition", ResponseSchema::scalar(SchemaType::Number)),
    ]))
}

/// Stage one of the thumbnail pipeline; the description is requested in English
/// because the image model follows English prompts best.
pub fn thumbnail_description_prompt(topic: &str) -> String {
    format!(
        "Descreva uma thumbnail de YouTube altamente clicável, vibrante e contrastante para um vídeo sobre \"{topic}\".\n\
         A descrição deve ser em Inglês (para melhor geração de imagem), detalhada, descrevendo a composição, \
         expressões faciais, cores e texto na imagem."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_prompt_mentions_topic_tone_and_count() {
        let prompt = titles_prompt("finanças", "Polêmico");
        assert!(prompt.contains("\"finanças\""));
        assert!(prompt.contains("O tom deve ser Polêmico."));
        assert!(prompt.contains("Gere 10 títulos"));
        assert!(prompt.contains("sem numeração"));
    }

    #[test]
    fn test_script_prompt_has_four_parts() {
        let prompt = script_prompt("Como ganhar views", "5 minutos");
        for section in ["1. Gancho", "2. Introdução", "3. Conteúdo Principal", "4. Conclusão e CTA"] {
            assert!(prompt.contains(section), "missing {section}");
        }
        assert!(prompt.contains("Duração estimada: 5 minutos."));
        assert!(prompt.contains("Markdown"));
    }

    #[test]
    fn test_tags_prompt_requests_comma_separated() {
        let prompt = tags_prompt("receitas");
        assert!(prompt.contains("Gere 20 tags"));
        assert!(prompt.contains("separadas por vírgula"));
    }

    #[test]
    fn test_trends_prompt_and_schema_agree() {
        let prompt = trends_prompt("games");
        assert!(prompt.contains("\"games\""));
        assert!(prompt.contains("Gere 6 meses de dados."));

        let schema = trends_schema();
        let item = schema.items.as_deref().unwrap();
        assert_eq!(item.required, vec!["month", "interest", "competition"]);
        assert_eq!(item.properties["interest"].kind, SchemaType::Number);
    }

    #[test]
    fn test_thumbnail_prompt_requests_english() {
        assert!(thumbnail_description_prompt("viagem").contains("em Inglês"));
    }
}
