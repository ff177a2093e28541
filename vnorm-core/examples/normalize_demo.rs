//! 正则化管道演示程序
//!
//! 运行：cargo run --example normalize_demo

use vnorm_core::{Normalizer, NormalizerConfig};

fn main() {
    vnorm_core::init_logging();

    println!("=== V-Norm 文本正则化演示 ===\n");

    let engine = Normalizer::new(&NormalizerConfig::default()).expect("grammar build failed");

    let test_cases = vec![
        // 数值类别
        ("der preis ist 23", "der preis ist 23"),
        ("etwa 3/4 davon", "etwa 3/4 davon"),
        ("1 3/4 tassen", "1 3/4 tassen"),
        ("am 01.04.2026", "am 01.04.2026"),
        ("am 1. april 2026", "am 1.4.2026"),
        ("um 14:30 uhr", "um 14:30"),

        // 白名单
        ("dr. meier kommt", "doktor meier kommt"),

        // 电子地址
        ("schreib an abc@hotmail.com", "schreib an a b c at hotmail punkt com"),
        ("schreib an abc@hotmail.com.", "schreib an a b c at hotmail punkt com."),
    ];

    println!("【测试用例】\n");
    for (i, (input, expected)) in test_cases.iter().enumerate() {
        let result = engine.normalize(input);
        match result {
            Ok(output) => {
                let status = if &output == expected { "✓" } else { "✗" };
                println!("#{} {} 原始: \"{}\"", i + 1, status, input);
                println!("     输出: \"{}\"", output);
                println!("     期望: \"{}\"", expected);

                if let Ok(tagged) = engine.tag(input) {
                    println!("     标注: {}", tagged);
                }
            }
            Err(e) => println!("#{} ✗ \"{}\" 失败: {}", i + 1, input, e),
        }
        println!();
    }
}
