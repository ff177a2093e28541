//! Classify - 分类器组合器
//!
//! 把全部类别识别器做加权并，套上 `tokens { … }` 定界，
//! 处理 token 间距与紧贴的句读，得到整行分类语法：
//! 一行原文 → 单空格连接的序列化 token 串。
//!
//! 权重语义：越小越优先；并列时由最短路径的
//! (权重, 输出字典序) 规则确定性消歧。

use crate::config::{InputCase, WeightTable};
use crate::error::NormResult;
use crate::fst::Transducer;
use crate::grammar::common::{delete_extra_space, delete_space, insert_space, wrap_tokens};
use crate::grammar::resources::Resources;
use crate::grammar::taggers;

/// 组合整行分类语法
pub fn build_classifier(
    weights: &WeightTable,
    input_case: InputCase,
    resources: &Resources,
) -> NormResult<Transducer> {
    weights.validate()?;
    let cased = input_case == InputCase::Cased;

    tracing::info!("building classifier grammar ({})", input_case.key());

    let classify = Transducer::union_all([
        taggers::whitelist::fst(resources, cased).weighted(weights.whitelist),
        taggers::cardinal::fst().weighted(weights.cardinal),
        taggers::ordinal::fst().weighted(weights.ordinal),
        taggers::decimal::fst().weighted(weights.decimal),
        taggers::fraction::fst().weighted(weights.fraction),
        taggers::date::fst(resources).weighted(weights.date),
        taggers::time::fst(cased).weighted(weights.time),
        taggers::electronic::fst(cased).weighted(weights.electronic),
        taggers::word::fst().weighted(weights.word),
    ]);

    let token = wrap_tokens(classify);
    let punct = wrap_tokens(taggers::punctuation::fst().weighted(weights.punctuation));

    // 内容 token 前后可紧贴句读（输入中无空格）
    let token_plus_punct = punct
        .clone()
        .concat(insert_space())
        .star()
        .concat(token)
        .concat(insert_space().concat(punct).star());

    // 一个或多个单元，输入的多余空白压成序列化形式中的单空格
    let graph = token_plus_punct
        .clone()
        .concat(delete_extra_space().concat(token_plus_punct).star());
    let graph = delete_space().concat(graph).concat(delete_space());

    Ok(graph.optimize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Transducer {
        build_classifier(
            &WeightTable::default(),
            InputCase::LowerCased,
            &Resources::load(None).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_single_word() {
        assert_eq!(
            classifier().apply_best("hallo").unwrap().output,
            "tokens { name: \"hallo\" }"
        );
    }

    #[test]
    fn test_cardinal_beats_word() {
        assert_eq!(
            classifier().apply_best("23").unwrap().output,
            "tokens { cardinal { integer: \"23\" } }"
        );
    }

    #[test]
    fn test_mixed_line() {
        assert_eq!(
            classifier().apply_best("der preis ist 23").unwrap().output,
            "tokens { name: \"der\" } tokens { name: \"preis\" } \
             tokens { name: \"ist\" } tokens { cardinal { integer: \"23\" } }"
        );
    }

    #[test]
    fn test_extra_spaces_collapse() {
        assert_eq!(
            classifier().apply_best("  ein   wort  ").unwrap().output,
            "tokens { name: \"ein\" } tokens { name: \"wort\" }"
        );
    }

    #[test]
    fn test_space_separated_punct_token() {
        assert_eq!(
            classifier().apply_best("ende .").unwrap().output,
            "tokens { name: \"ende\" } tokens { name: \".\" }"
        );
    }

    #[test]
    fn test_fraction_in_context() {
        assert_eq!(
            classifier().apply_best("etwa 3/4 davon").unwrap().output,
            "tokens { name: \"etwa\" } \
             tokens { fraction { numerator: \"3\" denominator: \"4\" } } \
             tokens { name: \"davon\" }"
        );
    }

    #[test]
    fn test_mixed_fraction_single_token() {
        // 帯分数把内部空格吸收进一个 token
        assert_eq!(
            classifier().apply_best("1 3/4").unwrap().output,
            "tokens { fraction { integer_part: \"1\" numerator: \"3\" denominator: \"4\" } }"
        );
    }

    #[test]
    fn test_whitelist_beats_word() {
        assert_eq!(
            classifier().apply_best("dr. meier").unwrap().output,
            "tokens { name: \"doktor\" } tokens { name: \"meier\" }"
        );
    }

    #[test]
    fn test_negative_weight_is_build_error() {
        let mut weights = WeightTable::default();
        weights.cardinal = -0.5;
        let result = build_classifier(
            &weights,
            InputCase::LowerCased,
            &Resources::load(None).unwrap(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deterministic_repeated_runs() {
        let grammar = classifier();
        let first = grammar.apply_best("der 2. termin um 14:30").unwrap().output;
        for _ in 0..5 {
            assert_eq!(
                grammar.apply_best("der 2. termin um 14:30").unwrap().output,
                first
            );
        }
    }
}
