//! First-aid prompt template

use super::DISCLAIMER;

/// Build the single-turn prompt embedding the user's question
pub fn build_prompt(question: &str) -> String {
    let mut prompt = String::with_capacity(1024 + question.len());

    prompt.push_str(
        "Sen bir ilk yardım uzmanısın. Yanıtların kısa, net ve sadece Türkçe olsun. \
         Sorunun bir ilk yardım durumu olduğunu varsay ve cevabını şu formatta, \
         adım adım bir liste olarak ver:\n",
    );
    prompt.push_str(
        "BAŞLIK:\n1. Adım 1\n2. Adım 2\n3. Adım 3\n...\n\n\
         Not: [Durumun ciddiyetine göre öneri, örneğin 'Hemen 112'yi arayın' \
         veya 'Durum devam ederse hastaneye gidin']\n",
    );
    prompt.push_str(&format!(
        "Eğer soruyu cevaplayamazsan veya ilk yardım durumu değilse, şu şekilde yanıt ver: '{}'\n",
        DISCLAIMER
    ));
    prompt.push_str(
        "Sorumluluk reddi: Bu chatbot tıbbi bir profesyonelin yerini tutmaz. \
         Acil durumlarda 112'yi arayın.\n",
    );
    prompt.push_str(&format!("Soru: {}\n", question));
    prompt.push_str(
        "Örnek yanıt:\n\
         BAŞ AĞRISI:\n\
         1. Sessiz ve karanlık bir odada dinlenin\n\
         2. Bol su için\n\
         3. Ağrı kesici alabilirsiniz (parasetamol gibi)\n\n\
         Not: Ağrı şiddetlenirse veya sık sık tekrarlarsa doktora başvurun",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_question_verbatim() {
        let prompt = build_prompt("Arı soktu, ne yapmalıyım?");
        assert!(prompt.contains("Soru: Arı soktu, ne yapmalıyım?\n"));
    }

    #[test]
    fn test_prompt_carries_format_fallback_and_example() {
        let prompt = build_prompt("x");
        assert!(prompt.contains("sadece Türkçe"));
        assert!(prompt.contains("BAŞLIK:\n1. Adım 1"));
        assert!(prompt.contains(DISCLAIMER));
        assert!(prompt.contains("Sorumluluk reddi"));
        assert!(prompt.ends_with("Not: Ağrı şiddetlenirse veya sık sık tekrarlarsa doktora başvurun"));
    }
}
