//! 成绩换算
//!
//! 百分比 → 等级 → 绩点的映射，以及学期 SGPA 的计算。

/// 按百分比映射等级
pub fn grade_for_percentage(percentage: f64) -> &'static str {
    if percentage >= 90.0 {
        "O"
    } else if percentage >= 80.0 {
        "A+"
    } else if percentage >= 70.0 {
        "A"
    } else if percentage >= 60.0 {
        "B+"
    } else if percentage >= 50.0 {
        "B"
    } else if percentage >= 40.0 {
        "C"
    } else {
        "F"
    }
}

/// 等级对应绩点
pub fn grade_points(grade: &str) -> f64 {
    match grade {
        "O" => 10.0,
        "A+" => 9.0,
        "A" => 8.0,
        "B+" => 7.0,
        "B" => 6.0,
        "C" => 5.0,
        _ => 0.0,
    }
}

/// 按得分与满分计算等级和绩点
pub fn grade_and_points(marks_obtained: f64, total_marks: f64) -> (&'static str, f64) {
    let percentage = if total_marks > 0.0 {
        marks_obtained / total_marks * 100.0
    } else {
        0.0
    };
    let grade = grade_for_percentage(percentage);
    (grade, grade_points(grade))
}

/// SGPA：学期内各科绩点的算术平均，保留两位小数
pub fn sgpa(points: &[f64]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let sum: f64 = points.iter().sum();
    (sum / points.len() as f64 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_for_percentage(90.0), "O");
        assert_eq!(grade_for_percentage(89.9), "A+");
        assert_eq!(grade_for_percentage(80.0), "A+");
        assert_eq!(grade_for_percentage(70.0), "A");
        assert_eq!(grade_for_percentage(60.0), "B+");
        assert_eq!(grade_for_percentage(50.0), "B");
        assert_eq!(grade_for_percentage(40.0), "C");
        assert_eq!(grade_for_percentage(39.9), "F");
        assert_eq!(grade_for_percentage(0.0), "F");
    }

    #[test]
    fn test_grade_points_mapping() {
        assert_eq!(grade_points("O"), 10.0);
        assert_eq!(grade_points("A+"), 9.0);
        assert_eq!(grade_points("A"), 8.0);
        assert_eq!(grade_points("B+"), 7.0);
        assert_eq!(grade_points("B"), 6.0);
        assert_eq!(grade_points("C"), 5.0);
        assert_eq!(grade_points("F"), 0.0);
        assert_eq!(grade_points("X"), 0.0);
    }

    #[test]
    fn test_grade_and_points_from_marks() {
        // 85/100 → 85% → A+ → 9.0
        let (grade, points) = grade_and_points(85.0, 100.0);
        assert_eq!(grade, "A+");
        assert_eq!(points, 9.0);

        // 满分为 0 时按 F 处理
        let (grade, points) = grade_and_points(10.0, 0.0);
        assert_eq!(grade, "F");
        assert_eq!(points, 0.0);
    }

    #[test]
    fn test_sgpa_average() {
        assert_eq!(sgpa(&[10.0, 9.0, 8.0]), 9.0);
        assert_eq!(sgpa(&[10.0, 9.0]), 9.5);
        assert_eq!(sgpa(&[8.0, 8.0, 7.0]), 7.67);
        assert_eq!(sgpa(&[]), 0.0);
    }
}
