mod geo_point_test;
