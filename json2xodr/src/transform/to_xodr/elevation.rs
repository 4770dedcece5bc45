use xml_tree::Element;

use super::number::scientific;
use crate::road::ElevationPolynomial;

/// The single `<elevation>` record, starting at the beginning of the road
#[must_use]
pub fn elevation_element(elevation: &ElevationPolynomial) -> Element {
    Element::new("elevation")
        .attr("s", scientific(0.0_f64))
        .attr("a", scientific(elevation.a))
        .attr("b", scientific(elevation.b))
        .attr("c", scientific(elevation.c))
        .attr("d", scientific(elevation.d))
}

#[cfg(test)]
mod tests {
    use super::elevation_element;
    use crate::road::ElevationPolynomial;

    #[test]
    fn test_elevation() {
        let element = elevation_element(&ElevationPolynomial {
            a: 2.0,
            b: 0.5,
            c: 0.0,
            d: -0.25,
        });
        assert_eq!(element.name(), "elevation");
        let attributes: Vec<(&str, &str)> = element.attributes().collect();
        assert_eq!(
            attributes,
            [
                ("s", "0.0000000000000000e+00"),
                ("a", "2.0000000000000000e+00"),
                ("b", "5.0000000000000000e-01"),
                ("c", "0.0000000000000000e+00"),
                ("d", "-2.5000000000000000e-01"),
            ]
        );
        assert!(element.is_empty());
    }
}
